fn main() -> eyre::Result<()> {
    appicons::run()
}
