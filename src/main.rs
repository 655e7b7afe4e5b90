fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = frost_panel::SnapshotController::new();

    controller.generate()?;
    controller.write("output/frost_panel.ppm")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
