pub fn init_test() {
    drop(env_logger::builder().is_test(true).try_init());
}
