#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Background/foreground pair applied to both panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
}

pub const LIGHT_PALETTE: Palette = Palette {
    background: Rgb(255, 255, 255),
    foreground: Rgb(0, 0, 0),
};

pub const DARK_PALETTE: Palette = Palette {
    background: Rgb(64, 64, 64),
    foreground: Rgb(255, 255, 255),
};

/// Two-state light/dark switch. Starts light on every launch.
#[derive(Debug)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeController {
    pub fn new() -> Self {
        Self {
            mode: ThemeMode::Light,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> Palette {
        match self.mode {
            ThemeMode::Light => LIGHT_PALETTE,
            ThemeMode::Dark => DARK_PALETTE,
        }
    }

    /// Flip the mode. Returns the palette to apply.
    pub fn toggle(&mut self) -> Palette {
        self.mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.palette()
    }
}
