use glam::Vec2;

/// Map a viewport (client) coordinate into surface units.
///
/// `rect_origin`/`rect_size` are the element's on-screen box and `backing` is
/// its pixel buffer size, so CSS scaling of the canvas is undone. Returns
/// `None` while the element has no on-screen area.
#[inline]
pub fn client_to_surface(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing: Vec2,
) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let local = client - rect_origin;
    Some(local / rect_size * backing)
}

#[inline]
pub fn within_surface(point: Vec2, backing: Vec2) -> bool {
    point.x >= 0.0 && point.y >= 0.0 && point.x <= backing.x && point.y <= backing.y
}
