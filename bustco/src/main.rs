use bustco::app::TcoApp;
use clap::Parser;

fn main() {
    env_logger::init();
    log::info!("bustco started at {}", chrono::Local::now().to_rfc3339());
    let args = TcoApp::parse();
    match args.op.run() {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("failed running bustco: {e}");
            std::process::exit(1);
        }
    }
}
