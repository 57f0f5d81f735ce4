// Half the glow's edge length.
pub const GLOW_RADIUS_PX: f64 = 192.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn from_client(client_x: i32, client_y: i32) -> Self {
        Self {
            x: f64::from(client_x),
            y: f64::from(client_y),
        }
    }

    pub fn glow_offset(self) -> (f64, f64) {
        (self.x - GLOW_RADIUS_PX, self.y - GLOW_RADIUS_PX)
    }

    pub fn glow_style(self) -> String {
        let (left, top) = self.glow_offset();
        format!("left: {left:.0}px; top: {top:.0}px;")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_is_centered_on_pointer_without_clamping() {
        let position = PointerPosition::from_client(10, 500);
        assert_eq!(position.glow_offset(), (-182.0, 308.0));
        assert_eq!(position.glow_style(), "left: -182px; top: 308px;");
    }
}
