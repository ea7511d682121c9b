#[tokio::main]
async fn main() {
    reservalab::run().await;
}
