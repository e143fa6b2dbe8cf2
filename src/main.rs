fn main() {
    cursor_links::run_cli();
}
