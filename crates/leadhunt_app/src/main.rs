mod console;

fn main() -> anyhow::Result<()> {
    console::run()
}
