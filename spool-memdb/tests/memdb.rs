mod common;

#[cfg(test)]
mod tests {
    use crate::common::{init_logs, unique_name};
    use spool_core::{CommandKind, Connection, Definition, Lease, Request, Value};
    use spool_memdb::{MemConnection, MemDatabase};

    fn totals_db(prefix: &str) -> MemDatabase {
        let db = MemDatabase::create(unique_name(prefix));
        db.script_rows(
            CommandKind::Routine,
            "reporting.GetTotals",
            &["total", "label"],
            vec![
                vec![10i64.into(), "east".into()],
                vec![20i64.into(), "west".into()],
                vec![30i64.into(), "north".into()],
            ],
        );
        db
    }

    fn totals_request<'c>(db: &MemDatabase) -> Request<'c, MemConnection> {
        let mut definition = Definition::routine("reporting", "GetTotals");
        definition.parameters_mut().add("region", 3).unwrap();
        Request::new(Lease::connect(db.descriptor()), definition.into_spec())
    }

    #[test]
    fn fetch_streams_rows_in_order() {
        init_logs();
        let db = totals_db("rows");
        let rows: Vec<_> = totals_request(&db)
            .fetch()
            .unwrap()
            .map(|row| row.unwrap().get::<String>("label").value().unwrap())
            .collect();
        assert_eq!(rows, ["east", "west", "north"]);
        let counters = db.counters();
        assert_eq!(counters.rows_served, 3);
        assert_eq!(counters.cursors, 1);
        assert_eq!(counters.cursor_drops, 1);
        assert_eq!(counters.opens, 1);
        assert_eq!(counters.closes, 1);
    }

    #[test]
    fn abandoned_cursor_still_releases_everything_once() {
        init_logs();
        let db = totals_db("abandon");
        let mut rows = totals_request(&db).fetch().unwrap();
        let first = rows.next().unwrap().unwrap();
        assert_eq!(first.get::<i64>("total").value(), Some(10));
        drop(rows);
        let counters = db.counters();
        assert_eq!(counters.rows_served, 1);
        assert_eq!(counters.cursor_drops, 1, "cursor released exactly once");
        assert_eq!(counters.closes, 1, "owned connection closed exactly once");
    }

    #[test]
    fn borrowed_connection_is_never_closed() {
        init_logs();
        let db = totals_db("borrow");
        let mut connection = MemConnection::connect(&db.descriptor()).unwrap();
        {
            let mut definition = Definition::routine("reporting", "GetTotals");
            definition.parameters_mut().add("region", 3).unwrap();
            let request = Request::new(Lease::borrow(&mut connection), definition.into_spec());
            let mut rows = request.fetch().unwrap();
            // Abandon after one row; disposal must still spare the connection.
            assert!(rows.next().is_some());
        }
        assert!(connection.is_open());
        let counters = db.counters();
        assert_eq!(counters.closes, 0);
        assert_eq!(counters.cursor_drops, 1);
    }

    #[test]
    fn mid_iteration_failure_surfaces_and_releases() {
        init_logs();
        let db = MemDatabase::create(unique_name("midfail"));
        db.script_rows_then_fail(
            CommandKind::Routine,
            "reporting.GetTotals",
            &["total"],
            vec![vec![10i64.into()]],
            "connection reset by engine",
        );
        let mut rows = Request::<MemConnection>::new(
            Lease::connect(db.descriptor()),
            Definition::routine("reporting", "GetTotals").into_spec(),
        )
        .fetch()
        .unwrap();
        assert!(rows.next().unwrap().is_ok());
        let error = rows.next().unwrap().unwrap_err();
        assert_eq!(error.to_string(), "connection reset by engine");
        assert!(rows.next().is_none(), "iteration ends after the failure");
        drop(rows);
        let counters = db.counters();
        assert_eq!(counters.cursor_drops, 1);
        assert_eq!(counters.closes, 1);
    }

    #[test]
    fn execute_returns_the_affected_count() {
        init_logs();
        let db = MemDatabase::create(unique_name("exec"));
        db.script_affected(
            CommandKind::Statement,
            "DELETE FROM totals WHERE obsolete = 1",
            7,
        );
        let request = Request::<MemConnection>::new(
            Lease::connect(db.descriptor()),
            Definition::statement("DELETE FROM totals WHERE obsolete = 1").into_spec(),
        );
        let affected = request.execute().unwrap();
        assert_eq!(affected.rows_affected, 7);
        let counters = db.counters();
        assert_eq!(counters.closes, 1, "lease disposed before execute returns");
        assert_eq!(counters.cursors, 0);
    }

    #[test]
    fn execution_failure_still_disposes_the_lease() {
        init_logs();
        let db = MemDatabase::create(unique_name("fail"));
        db.script_failure(
            CommandKind::Routine,
            "reporting.GetTotals",
            "routine exploded",
        );
        let result = totals_request(&db).fetch();
        assert!(result.is_err());
        let counters = db.counters();
        assert_eq!(counters.closes, 1);
        assert_eq!(counters.cursors, 0, "no cursor was ever started");
    }

    #[test]
    fn parameters_reach_the_driver_in_order() {
        init_logs();
        let db = MemDatabase::create(unique_name("params"));
        db.script_affected(CommandKind::Routine, "reporting.Prune", 0);
        let mut definition = Definition::routine("reporting", "Prune");
        definition
            .parameters_mut()
            .add("region", 3)
            .unwrap()
            .add_opt("limit", None::<i32>)
            .unwrap()
            .add("label", "east")
            .unwrap();
        Request::<MemConnection>::new(Lease::connect(db.descriptor()), definition.into_spec())
            .execute()
            .unwrap();
        assert_eq!(
            db.last_parameters(),
            [
                ("@region".to_string(), Value::Int32(Some(3))),
                ("@label".to_string(), Value::Varchar(Some("east".into()))),
            ],
        );
    }

    #[test]
    fn single_word_statement_is_dispatched_as_a_routine() {
        init_logs();
        let db = MemDatabase::create(unique_name("heuristic"));
        // The statement was scripted as a statement, but the classification
        // heuristic sees a single word and dispatches a routine call.
        db.script_affected(CommandKind::Statement, "Cleanup", 1);
        let request = Request::<MemConnection>::new(
            Lease::connect(db.descriptor()),
            Definition::statement("Cleanup").into_spec(),
        );
        assert!(request.execute().is_err());
        // Scripting it as a routine matches the dispatch.
        db.script_affected(CommandKind::Routine, "Cleanup", 1);
        let request = Request::<MemConnection>::new(
            Lease::connect(db.descriptor()),
            Definition::statement("Cleanup").into_spec(),
        );
        assert_eq!(request.execute().unwrap().rows_affected, 1);
    }

    #[test]
    fn lease_open_is_idempotent() {
        init_logs();
        let db = MemDatabase::create(unique_name("lease"));
        let mut lease: Lease<'_, MemConnection> = Lease::connect(db.descriptor());
        assert!(!lease.is_open());
        assert!(lease.connection().is_err(), "no native handle before open");
        lease.open().unwrap();
        lease.open().unwrap();
        assert!(lease.is_open());
        assert_eq!(db.counters().opens, 1, "no duplicate native open");
        lease.close().unwrap();
        lease.close().unwrap();
        assert_eq!(db.counters().closes, 1);
        lease.open().unwrap();
        assert_eq!(db.counters().opens, 2, "reopening connects again");
        drop(lease);
        assert_eq!(db.counters().closes, 2, "drop closes the owned connection");
    }
}
