#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Fill colour behind the frost snapshot.
    pub const AZURE: Rgb = Rgb {
        r: 240,
        g: 255,
        b: 255,
    };
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn azure_matches_the_css_value() {
        assert_eq!(
            Rgb::AZURE,
            Rgb {
                r: 240,
                g: 255,
                b: 255
            }
        );
    }
}
