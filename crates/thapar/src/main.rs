use thapar::cli;
use thapar::cli::ux;
use thapar_core::model::ModelInitError;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        // A missing credential is reported as a plain line on stdout
        match e.downcast_ref::<ModelInitError>() {
            Some(init_error) => println!("{init_error}"),
            None => ux::present_error(e),
        }
        std::process::exit(1);
    }
}
