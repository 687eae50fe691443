/// Representa un rectángulo de la UI (un "quad").
///
/// Todos los campos están en coordenadas de píxeles: `pos` es la esquina
/// superior izquierda, `size` el ancho/alto y `color` es un RGBA con componentes
/// en el rango 0.0..1.0.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct GuiQuad {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    pub radii: [f32; 4],
}

/// Lote de `GuiQuad` listo para subir a un buffer de instancias.
#[derive(Debug, Default)]
pub struct GuiBatch {
    quads: Vec<GuiQuad>,
}

impl GuiBatch {
    pub fn new() -> Self {
        Self { quads: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.quads.clear();
    }

    pub fn push(&mut self, quad: GuiQuad) {
        self.quads.push(quad);
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn quads(&self) -> &[GuiQuad] {
        &self.quads
    }

    /// Raw instance data, laid out as the `#[repr(C)]` quads.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.quads)
    }
}

// --- text batching --------------------------------------------------------

/// A string to be shaped at `pos` by whatever font backend consumes the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub pos: [f32; 2],
    pub text: String,
    pub size: f32,
    pub color: [f32; 4],
}

/// Batch of text runs.
#[derive(Debug, Default)]
pub struct TextBatch {
    runs: Vec<TextRun>,
}

impl TextBatch {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }

    pub fn push(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }
}
