use glam::Vec2;
use serde::Serialize;

use crate::math::Colour;

/// How the renderer groups consecutive vertices of a [`GeometryBuffer`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    Triangles,
    Lines,
    LineStrip,
    Points,
}

impl Topology {
    /// Vertices per shape
    pub const fn stride(self) -> usize {
        match self {
            Topology::Triangles => 3,
            Topology::Lines => 2,
            Topology::LineStrip | Topology::Points => 1,
        }
    }
}

/// Interleaved vertex for GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub colour: [f32; 3],
}

/// Parallel position and colour sequences, one colour per vertex.
///
/// Generators build one of these, refine it pass by pass and hand it to the caller by value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeometryBuffer {
    topology: Topology,
    positions: Vec<[f32; 2]>,
    colours: Vec<Colour>,
}

impl GeometryBuffer {
    pub fn new(topology: Topology) -> Self {
        Self::with_capacity(topology, 0)
    }

    pub fn with_capacity(topology: Topology, vertices: usize) -> Self {
        Self {
            topology,
            positions: Vec::with_capacity(vertices),
            colours: Vec::with_capacity(vertices),
        }
    }

    pub fn push(&mut self, position: [f32; 2], colour: Colour) {
        self.positions.push(position);
        self.colours.push(colour);
    }

    pub fn push_point(&mut self, position: Vec2, colour: Colour) {
        self.push(position.to_array(), colour);
    }

    /// Pushes a two-vertex segment
    pub fn push_segment(&mut self, from: (Vec2, Colour), to: (Vec2, Colour)) {
        self.push_point(from.0, from.1);
        self.push_point(to.0, to.1);
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn positions(&self) -> &[[f32; 2]] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [[f32; 2]] {
        &mut self.positions
    }

    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Positions as `x, y, x, y, ...`
    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colours as `r, g, b, r, g, b, ...`
    pub fn flat_colours(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colours)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn shape_count(&self) -> usize {
        self.positions.len() / self.topology.stride()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates whole shapes (triangles, segments or single points) with their vertex colours
    pub fn shapes(&self) -> impl Iterator<Item = (&[[f32; 2]], &[Colour])> {
        let stride = self.topology.stride();
        self.positions
            .chunks_exact(stride)
            .zip(self.colours.chunks_exact(stride))
    }

    pub fn interleaved(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.colours)
            .map(|(&position, &colour)| Vertex { position, colour })
            .collect()
    }

    /// Splits into the `(positions, colours)` pair the render collaborator uploads
    pub fn into_parts(self) -> (Vec<[f32; 2]>, Vec<Colour>) {
        (self.positions, self.colours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_stride() {
        assert_eq!(Topology::Triangles.stride(), 3);
        assert_eq!(Topology::Lines.stride(), 2);
        assert_eq!(Topology::LineStrip.stride(), 1);
        assert_eq!(Topology::Points.stride(), 1);
    }

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 5 * std::mem::size_of::<f32>());
    }

    #[test]
    fn test_shapes_skip_partial_tail() {
        let mut buffer = GeometryBuffer::new(Topology::Lines);
        buffer.push([0.0, 0.0], [1.0, 0.0, 0.0]);
        buffer.push([1.0, 1.0], [0.0, 1.0, 0.0]);
        buffer.push([2.0, 2.0], [0.0, 0.0, 1.0]);

        assert_eq!(buffer.shapes().count(), 1);
        assert_eq!(buffer.shape_count(), 1);
        assert_eq!(buffer.vertex_count(), 3);
    }
}
