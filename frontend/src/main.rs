//! Entry point for the WASM application

pub fn main() {
    chunkmydocs_web::start();
}
