fn main() -> anyhow::Result<()> {
    gapfinder_session::cli::run()
}
