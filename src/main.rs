fn main() {
    cartctl::app::cli::run();
}
