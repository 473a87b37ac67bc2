fn main() {
    match wayfinder::run() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}
