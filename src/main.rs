fn main() {
    if let Err(e) = todo_cli::tui::run() {
        eprintln!("todo-cli: {}", e);
        std::process::exit(1);
    }
}
