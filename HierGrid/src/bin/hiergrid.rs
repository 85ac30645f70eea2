fn main() -> anyhow::Result<()> {
    hiergrid::cli::run_cli()
}
