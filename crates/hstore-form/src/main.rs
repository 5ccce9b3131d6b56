fn main() -> anyhow::Result<()> {
    hstore_form::cli::main()
}
