#[cfg(test)]
mod tests {
    use sluice_core::Connection;
    use sluice_mem::MemConnection;
    use sluice_tests::{
        authors_fixture, books_fixture, execute_mars_tests, execute_precompile_tests,
        execute_serial_tests, init_logs,
    };

    async fn open_seeded(url: &'static str) -> MemConnection {
        let mut connection = MemConnection::connect(url.into())
            .await
            .expect("Could not open the connection");
        let (labels, rows) = authors_fixture();
        connection
            .load_table("authors", labels, rows)
            .expect("Failed to load the authors table");
        let (labels, rows) = books_fixture();
        connection
            .load_table("books", labels, rows)
            .expect("Failed to load the books table");
        connection
    }

    #[tokio::test]
    async fn serial() {
        init_logs();
        execute_serial_tests(open_seeded("mem://?mars=false").await).await;
    }

    #[tokio::test]
    async fn mars() {
        init_logs();
        execute_mars_tests(open_seeded("mem://?mars=true").await).await;
    }

    #[tokio::test]
    async fn no_precompilation() {
        init_logs();
        execute_precompile_tests(open_seeded("mem://?precompiled=false").await).await;
    }

    #[tokio::test]
    async fn bad_urls_are_rejected() {
        init_logs();
        MemConnection::connect("sqlite://file.db".into())
            .await
            .expect_err("A foreign scheme should be rejected");
        MemConnection::connect("mem://?mars=maybe".into())
            .await
            .expect_err("A malformed option value should be rejected");
        MemConnection::connect("mem://?pool=4".into())
            .await
            .expect_err("An unknown option should be rejected");
    }
}
