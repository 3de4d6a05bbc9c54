use log::error;

use pseudo3d::Config;

fn main() {
    env_logger::init();

    if let Err(e) = pseudo3d::app::run(Config::default()) {
        error!("{e}");
        std::process::exit(1);
    }
}
