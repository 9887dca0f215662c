use eclocate::app;

fn main() {
    app::startup::startup();
}
