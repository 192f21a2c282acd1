use glam::Vec2;

/// 2D drawing target the render loop paints into.
///
/// Mirrors the subset of a canvas 2D context the field needs: one cleared
/// frame, one path made of circles, one fill.
pub trait DrawSurface {
    /// Size the surface currently occupies on screen, in surface units.
    fn client_size(&self) -> (u32, u32);
    /// Resize the backing pixel buffer.
    fn set_backing_size(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn begin_path(&mut self);
    /// Append a full circle to the current path.
    fn circle(&mut self, center: Vec2, radius: f32);
    /// Close the current path and fill it with `color`.
    fn fill(&mut self, color: &str);
}
