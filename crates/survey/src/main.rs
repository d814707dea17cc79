fn main() -> anyhow::Result<()> {
    survey::logging::init();
    survey::cli::main()
}
