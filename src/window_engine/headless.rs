use anyhow::Result;
use std::collections::VecDeque;

use super::r#trait::{HostEvent, WindowEngine};
use crate::renderer_engine::{Canvas, Surface};

/// Hôte sans fenêtre : événements scriptés frame par frame, présentations comptées.
#[derive(Debug, Default)]
pub struct HeadlessWindowEngine {
    size: (u32, u32),
    /// Un lot d'événements par appel à `poll_events`
    pub scripted_events: VecDeque<Vec<HostEvent>>,
    pub presented_frames: usize,
    pub last_presented_size: Option<(u32, u32)>,
    /// Demande la fermeture après ce nombre de présentations
    pub close_after: Option<usize>,
    pub closed: bool,
    should_close: bool,
}

impl HeadlessWindowEngine {
    pub fn with_events(mut self, frames: impl IntoIterator<Item = Vec<HostEvent>>) -> Self {
        self.scripted_events.extend(frames);
        self
    }

    pub fn with_close_after(mut self, frames: usize) -> Self {
        self.close_after = Some(frames);
        self
    }
}

impl WindowEngine for HeadlessWindowEngine {
    fn init(width: u32, height: u32, _title: &str) -> Result<Self> {
        Ok(Self {
            size: (width, height),
            ..Default::default()
        })
    }

    fn poll_events(&mut self) -> Vec<HostEvent> {
        let events = self.scripted_events.pop_front().unwrap_or_default();
        for event in &events {
            if let HostEvent::Resized(w, h) = *event {
                self.size = (w, h);
            }
        }
        events
    }

    fn present(&mut self, canvas: &Canvas) {
        self.presented_frames += 1;
        self.last_presented_size = Some((canvas.width(), canvas.height()));
        if self.close_after == Some(self.presented_frames) {
            self.should_close = true;
        }
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    fn get_size(&self) -> (u32, u32) {
        self.size
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
