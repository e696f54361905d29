/// One rendered PNG: its file name inside the icons directory and its square edge length.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct SizeEntry {
    pub filename: &'static str,
    pub size: u32,
}

impl SizeEntry {
    const fn new(filename: &'static str, size: u32) -> Self {
        SizeEntry { filename, size }
    }
}

impl std::fmt::Display for SizeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.filename, self.size, self.size)
    }
}

/// Sizes rendered from the source SVG, in rendering order.
pub const SIZES: &[SizeEntry] = &[
    // macOS app icon
    SizeEntry::new("icon_16x16.png", 16),
    SizeEntry::new("icon_32x32.png", 32),
    SizeEntry::new("icon_128x128.png", 128),
    SizeEntry::new("icon_256x256.png", 256),
    SizeEntry::new("icon_512x512.png", 512),
    SizeEntry::new("icon_1024x1024.png", 1024),
    // Windows and Linux
    SizeEntry::new("icon_48x48.png", 48),
    SizeEntry::new("icon_64x64.png", 64),
    SizeEntry::new("icon_96x96.png", 96),
];

/// PNGs packed into the ICO container, largest first.
pub const CONTAINER_CANDIDATES: &[&str] = &[
    "icon_256x256.png",
    "icon_128x128.png",
    "icon_64x64.png",
    "icon_48x48.png",
    "icon_32x32.png",
    "icon_16x16.png",
];
