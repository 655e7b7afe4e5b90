fn main() {
    frost_panel::run_gui();
}
