use crate::{
    MemDriver,
    command::MemCommand,
    store::{self, SharedStore},
};
use spool_core::{CommandKind, CommandSpec, Connection, Context, Driver, Error, Result};
use url::Url;

/// Connection to a named in-memory database.
pub struct MemConnection {
    name: String,
    store: SharedStore,
    open: bool,
}

impl Connection for MemConnection {
    type Driver = MemDriver;

    fn connect(descriptor: &str) -> Result<Self> {
        let url = Url::parse(descriptor)
            .with_context(|| format!("While decoding connection descriptor `{descriptor}`"))?;
        if url.scheme() != MemDriver::NAME {
            return Err(Error::msg(format!(
                "Expected a memdb connection descriptor to start with `{}://`",
                MemDriver::NAME,
            )));
        }
        let name = url
            .host_str()
            .ok_or_else(|| Error::msg(format!("Descriptor `{descriptor}` names no database")))?;
        let Some(store) = store::find(name) else {
            let error = Error::msg(format!("Unknown memdb database `{name}`"));
            log::error!("{error:#}");
            return Err(error);
        };
        store::lock(&store).counters.opens += 1;
        Ok(Self {
            name: name.into(),
            store,
            open: true,
        })
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) -> Result<()> {
        if !self.open {
            self.open = true;
            store::lock(&self.store).counters.opens += 1;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.open {
            self.open = false;
            store::lock(&self.store).counters.closes += 1;
        }
        Ok(())
    }

    fn command(&mut self, spec: &CommandSpec) -> Result<<Self::Driver as Driver>::Command> {
        if !self.open {
            let error = Error::msg(format!(
                "Cannot build a command on the closed connection to `{}`",
                self.name,
            ));
            log::error!("{error:#}");
            return Err(error);
        }
        let mut store = store::lock(&self.store);
        store.counters.commands += 1;
        store.last_parameters = spec
            .parameters
            .iter()
            .map(|p| (p.name().as_str().into(), p.value().clone()))
            .collect();
        let Some(script) = store.script(spec.kind, &spec.text) else {
            let error = Error::msg(format!(
                "No script installed for {} `{}` on database `{}`",
                match spec.kind {
                    CommandKind::Routine => "routine",
                    CommandKind::Statement => "statement",
                },
                spec.text,
                self.name,
            ));
            log::error!("{error:#}");
            return Err(error);
        };
        drop(store);
        Ok(MemCommand::new(self.store.clone(), script))
    }
}
