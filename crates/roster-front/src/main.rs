fn main() {
    #[cfg(target_arch = "wasm32")]
    roster_front::start();
}
