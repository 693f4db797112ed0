use meshkit_engine::input::{InputEvent, Key, KeyState};
use meshkit_engine::mesh::{Mesh, MeshDevice, MeshError, Shape};

/// One of the five shapes the viewer can show, in key order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShapeSlot {
    Triangle,
    Circle,
    Quad,
    Cube,
    Pyramid,
}

impl ShapeSlot {
    pub const ALL: [ShapeSlot; 5] = [
        ShapeSlot::Triangle,
        ShapeSlot::Circle,
        ShapeSlot::Quad,
        ShapeSlot::Cube,
        ShapeSlot::Pyramid,
    ];

    /// Digits 1-5 select a slot; every other key is ignored.
    pub fn from_key(key: Key) -> Option<ShapeSlot> {
        match key.as_digit()? {
            0 => None,
            d => Self::ALL.get(usize::from(d) - 1).copied(),
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            ShapeSlot::Triangle => Shape::triangle(),
            ShapeSlot::Circle => Shape::circle(),
            ShapeSlot::Quad => Shape::quad(),
            ShapeSlot::Cube => Shape::cube(),
            ShapeSlot::Pyramid => Shape::pyramid(),
        }
    }

    /// 3D shapes rotate; flat ones face the camera.
    pub fn spins(self) -> bool {
        matches!(self, ShapeSlot::Cube | ShapeSlot::Pyramid)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Last slot selected by a fresh key press in `events`, if any.
pub fn selected_slot(events: &[InputEvent]) -> Option<ShapeSlot> {
    events
        .iter()
        .filter_map(|ev| match ev {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
                ..
            } => ShapeSlot::from_key(*key),
            _ => None,
        })
        .last()
}

/// The five prebuilt meshes, uploaded once.
pub struct Showcase<D: MeshDevice> {
    meshes: Vec<Mesh<D>>,
}

impl<D: MeshDevice> Showcase<D> {
    pub fn build(device: &D) -> Result<Self, MeshError> {
        let meshes = ShapeSlot::ALL
            .iter()
            .map(|slot| Mesh::from_shape(device, &slot.shape()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { meshes })
    }

    pub fn mesh(&self, slot: ShapeSlot) -> &Mesh<D> {
        &self.meshes[slot.index()]
    }
}
