fn main() {
    uwconf::app::cli::run();
}
