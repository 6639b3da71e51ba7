use {
  super::Surface,
  crate::geometry::Dot
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
  FillStyle(&'static str),
  BeginPath,
  Arc { center: Dot, radius: f32, start: f32, end: f32 },
  Fill,
}

/// Remembers every call, draws nothing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
  pub calls: Vec<Call>,
}

impl RecordingSurface {
  /// Centers of all filled circles, in draw order.
  pub fn dots(&self) -> Vec<Dot> {
    self.calls.iter()
      .filter_map(|call| match call {
        Call::Arc { center, .. } => Some(*center),
        _ => None
      })
      .collect()
  }

  pub fn fill_styles(&self) -> usize {
    self.calls.iter()
      .filter(|call| matches!(call, Call::FillStyle(_)))
      .count()
  }
}

impl Surface for RecordingSurface {
  type FillStyle = &'static str;

  fn set_fill_style(&mut self, style: Self::FillStyle) {
    self.calls.push(Call::FillStyle(style));
  }

  fn begin_path(&mut self) {
    self.calls.push(Call::BeginPath);
  }

  fn arc(&mut self, center: Dot, radius: f32, start: f32, end: f32) {
    self.calls.push(Call::Arc { center, radius, start, end });
  }

  fn fill(&mut self) {
    self.calls.push(Call::Fill);
  }
}
