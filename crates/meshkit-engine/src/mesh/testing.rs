//! In-memory device that records every call, for tests without a GPU.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::device::{BufferKind, MeshDevice};
use super::error::MeshError;
use super::vertex::VertexLayout;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    CreateVertexArray { id: u32, stride: u64, attributes: usize },
    CreateBuffer { id: u32, kind: BufferKind, bytes: usize },
    Draw { vertex_array: u32, vertex_buffer: u32, index_buffer: u32, index_count: u32 },
    Release { id: u32 },
}

impl Op {
    pub fn created_id(&self) -> Option<u32> {
        match *self {
            Op::CreateVertexArray { id, .. } | Op::CreateBuffer { id, .. } => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Handle(u32);

#[derive(Default)]
struct State {
    next_id: u32,
    attempts: usize,
    fail_at: Option<usize>,
    ops: Vec<Op>,
    labels: Vec<String>,
    uploads: HashMap<BufferKind, Vec<Vec<u8>>>,
    live: HashSet<u32>,
    released: usize,
    double_releases: Vec<u32>,
}

impl State {
    fn allocate(&mut self, label: &str) -> Result<u32, MeshError> {
        self.attempts += 1;
        if self.fail_at == Some(self.attempts) {
            return Err(MeshError::allocation(label, "out of memory"));
        }
        self.next_id += 1;
        self.live.insert(self.next_id);
        self.labels.push(label.to_string());
        Ok(self.next_id)
    }

    fn release(&mut self, id: u32) {
        if self.live.remove(&id) {
            self.released += 1;
        } else {
            self.double_releases.push(id);
        }
        self.ops.push(Op::Release { id });
    }
}

#[derive(Clone, Default)]
pub struct RecordingDevice {
    state: Rc<RefCell<State>>,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Device whose `n`-th allocation (1-based) fails.
    pub fn failing_at(n: usize) -> Self {
        let dev = Self::default();
        dev.state.borrow_mut().fail_at = Some(n);
        dev
    }

    /// Construction-side ops (draws are recorded into the pass, not here).
    pub fn ops(&self) -> Vec<Op> {
        self.state
            .borrow()
            .ops
            .iter()
            .filter(|op| !matches!(op, Op::Release { .. }))
            .cloned()
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.state.borrow().labels.clone()
    }

    pub fn uploaded(&self, kind: BufferKind) -> Vec<Vec<u8>> {
        self.state.borrow().uploads.get(&kind).cloned().unwrap_or_default()
    }

    pub fn live(&self) -> usize {
        self.state.borrow().live.len()
    }

    pub fn created(&self) -> usize {
        self.state.borrow().next_id as usize
    }

    pub fn released(&self) -> usize {
        self.state.borrow().released
    }

    pub fn double_releases(&self) -> Vec<u32> {
        self.state.borrow().double_releases.clone()
    }
}

impl MeshDevice for RecordingDevice {
    type VertexArray = Handle;
    type Buffer = Handle;
    type Pass<'p> = Vec<Op>;

    fn create_vertex_array(
        &self,
        label: &str,
        layout: &'static VertexLayout,
    ) -> Result<Handle, MeshError> {
        let mut s = self.state.borrow_mut();
        let id = s.allocate(label)?;
        s.ops.push(Op::CreateVertexArray {
            id,
            stride: layout.stride,
            attributes: layout.attributes.len(),
        });
        Ok(Handle(id))
    }

    fn create_buffer(
        &self,
        label: &str,
        kind: BufferKind,
        contents: &[u8],
    ) -> Result<Handle, MeshError> {
        let mut s = self.state.borrow_mut();
        let id = s.allocate(label)?;
        s.ops.push(Op::CreateBuffer { id, kind, bytes: contents.len() });
        s.uploads.entry(kind).or_default().push(contents.to_vec());
        Ok(Handle(id))
    }

    fn draw_indexed(
        &self,
        pass: &mut Vec<Op>,
        vertex_array: &Handle,
        vertex_buffer: &Handle,
        index_buffer: &Handle,
        index_count: u32,
    ) {
        pass.push(Op::Draw {
            vertex_array: vertex_array.0,
            vertex_buffer: vertex_buffer.0,
            index_buffer: index_buffer.0,
            index_count,
        });
    }

    fn release_vertex_array(&self, vertex_array: Handle) {
        self.state.borrow_mut().release(vertex_array.0);
    }

    fn release_buffer(&self, buffer: Handle) {
        self.state.borrow_mut().release(buffer.0);
    }
}
