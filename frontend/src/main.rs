fn main() {
    #[cfg(target_arch = "wasm32")]
    hrms_lite_frontend::start();
}
