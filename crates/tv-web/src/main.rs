fn main() {
    // Initialize platform-specific logging
    tv_web::logging::init();
    tv_web::web::start();
}
