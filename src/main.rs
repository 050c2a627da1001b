use chess_core::protocol;

fn main() {
    if let Err(e) = protocol::run_protocol_loop() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
