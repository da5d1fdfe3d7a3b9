#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lingua_admin::run().await
}
