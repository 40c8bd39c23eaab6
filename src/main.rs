//! install-llvm - GitHub Action that installs a stripped LLVM build

use install_llvm::action;
use install_llvm::logging::{init_logger, set_failed};

fn main() {
    init_logger();

    if let Err(e) = action::run() {
        set_failed(&e.to_string());
        std::process::exit(1);
    }
}
