//! Animation settings, caller-owned playback state, and the three playback
//! modes: live ticking, prerendered replay, and export planning.

use serde::{Deserialize, Serialize};

use crate::config::{TweenTolerances, View, WindowSize};
use crate::error::EngineError;
use crate::fastframe::FastFrame;
use crate::frame::Frame;
use crate::interp::{Transition, TweenMethod};

/// Default tween span between adjacent keyframes, in ticks.
const DEFAULT_GAP_TICKS: usize = 50;
/// Transitions never collapse below two ticks.
const MIN_GAP_TICKS: usize = 2;

/// An ordered keyframe sequence plus the timing and view settings that turn
/// it into a playable animation.
///
/// Playback position lives in [`PlaybackState`], owned by the caller and
/// threaded through the tick functions, so several independent playbacks
/// can share one `Animation` and the state machine stays unit-testable
/// without an event loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub keyframes: Vec<Frame>,
    /// Ticks each keyframe-to-keyframe transition spans, inclusive of the
    /// starting keyframe's tick. Must hold `keyframes.len() - 1` entries
    /// when playback starts.
    pub frame_counts: Vec<usize>,
    /// Target ticks per second.
    pub frame_rate: f64,
    pub view: View,
    pub window: WindowSize,
    pub transition: Transition,
    pub method: TweenMethod,
    pub tolerances: TweenTolerances,
}

impl Animation {
    pub fn new(keyframes: Vec<Frame>) -> Self {
        let gaps = keyframes.len().saturating_sub(1);
        Self {
            keyframes,
            frame_counts: vec![DEFAULT_GAP_TICKS; gaps],
            frame_rate: 30.0,
            view: View::default(),
            window: WindowSize::default(),
            transition: Transition::default(),
            method: TweenMethod::default(),
            tolerances: TweenTolerances::default(),
        }
    }

    /// Ticks spanned by an authored transition duration in seconds.
    /// Floored at two ticks so no transition degenerates.
    #[inline]
    pub fn ticks_for_duration(duration: f64, frame_rate: f64) -> usize {
        ((duration * frame_rate).round().max(0.0) as usize).max(MIN_GAP_TICKS)
    }

    /// Ticks a keyframe holds on screen for an authored delay in seconds.
    #[inline]
    pub fn ticks_for_delay(delay: f64, frame_rate: f64) -> u32 {
        (delay * frame_rate).round().max(0.0) as u32
    }

    /// Total tween-budget ticks across all gaps.
    #[inline]
    pub fn total_ticks(&self) -> usize {
        self.frame_counts.iter().sum()
    }

    /// Seconds between scheduled ticks for the host event loop.
    #[inline]
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.frame_rate
    }

    /// Check every precondition that must hold before any tick runs.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.keyframes.is_empty() {
            return Err(EngineError::NoKeyframes);
        }
        if self.frame_counts.len() != self.keyframes.len() - 1 {
            return Err(EngineError::FrameCountMismatch {
                counts: self.frame_counts.len(),
                keyframes: self.keyframes.len(),
            });
        }
        self.view.validate()?;
        self.window.validate()?;
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(EngineError::InvalidFrameRate {
                rate: self.frame_rate,
            });
        }
        Ok(())
    }

    /// Locate the keyframe gap and intra-gap sub-tick holding a global
    /// tick. Callers guarantee `tick < total_ticks()`.
    fn locate(&self, tick: usize) -> (usize, usize) {
        let mut gap = 0;
        let mut sub = tick;
        while sub >= self.frame_counts[gap] {
            sub -= self.frame_counts[gap];
            gap += 1;
        }
        (gap, sub)
    }

    /// The frame shown at a global tick. Every playback mode shares this
    /// math, so live, prerendered, and exported output agree exactly.
    ///
    /// Sub-tick 0 of a gap is the gap's starting keyframe itself (authored
    /// delay included); any tick at or past the budget is the terminal
    /// keyframe.
    pub fn frame_at(&self, tick: usize) -> Result<Frame, EngineError> {
        if self.keyframes.is_empty() {
            return Err(EngineError::NoKeyframes);
        }
        if tick >= self.total_ticks() {
            return Ok(self.keyframes[self.keyframes.len() - 1].clone());
        }
        let (gap, sub) = self.locate(tick);
        if sub == 0 {
            Ok(self.keyframes[gap].clone())
        } else {
            let t = self.transition.apply(sub as f64 / self.frame_counts[gap] as f64);
            self.keyframes[gap].tween_with(&self.keyframes[gap + 1], t, self.method, &self.tolerances)
        }
    }

    /// Validate preconditions and produce a fresh running playback state.
    pub fn start(&self) -> Result<PlaybackState, EngineError> {
        self.validate()?;
        Ok(PlaybackState {
            tick: 0,
            hold: 0,
            phase: Phase::Running,
        })
    }

    /// Advance live playback by one tick.
    ///
    /// A keyframe tick arms that keyframe's authored hold; held ticks
    /// decrement the counter without touching the tween budget. Past the
    /// final budget tick the terminal keyframe renders once more and the
    /// state finishes with its position rewound for the next run.
    pub fn tick(&self, state: &mut PlaybackState) -> Result<TickDraw, EngineError> {
        if state.phase != Phase::Running {
            return Ok(TickDraw::Idle);
        }
        if state.hold > 0 {
            state.hold -= 1;
            return Ok(TickDraw::Hold);
        }
        if state.tick >= self.total_ticks() {
            let terminal = self.frame_at(state.tick)?;
            state.tick = 0;
            state.phase = Phase::Finished;
            return Ok(TickDraw::Frame(terminal));
        }
        let frame = self.frame_at(state.tick)?;
        state.hold = frame.delay;
        state.tick += 1;
        Ok(TickDraw::Frame(frame))
    }

    /// Precompute a [`FastFrame`] for every budget tick plus the terminal
    /// keyframe. Trades memory for eliminating tween and projection math
    /// during replay.
    pub fn prerender(&self) -> Result<Vec<FastFrame>, EngineError> {
        self.validate()?;
        let total = self.total_ticks();
        let mut frames = Vec::with_capacity(total + 1);
        for tick in 0..=total {
            let mut frame = self.frame_at(tick)?;
            frames.push(frame.prerender(&self.view, &self.window));
        }
        log::debug!(
            "prerendered {} fast frames at {}x{}",
            frames.len(),
            self.window.width,
            self.window.height
        );
        Ok(frames)
    }

    /// Advance prerendered playback by one tick over `frames` produced by
    /// [`Animation::prerender`]. The returned index points at the table the
    /// backend should copy into its persistent buffers.
    pub fn tick_prerendered(&self, frames: &[FastFrame], state: &mut PlaybackState) -> TickDraw {
        if state.phase != Phase::Running {
            return TickDraw::Idle;
        }
        if state.hold > 0 {
            state.hold -= 1;
            return TickDraw::Hold;
        }
        if state.tick >= frames.len() {
            state.tick = 0;
            state.phase = Phase::Finished;
            return TickDraw::Idle;
        }
        let index = state.tick;
        state.hold = frames[index].delay;
        state.tick += 1;
        TickDraw::Fast(index)
    }

    /// Plan a frame-by-frame export: every budget tick plus the terminal
    /// keyframe, with sequential zero-padded file names. The caller renders
    /// each frame and writes the pixels; keyframe holds do not repeat
    /// frames in an export.
    pub fn export_frames(&self) -> Result<Vec<ExportFrame>, EngineError> {
        self.validate()?;
        let total = self.total_ticks();
        let digits = export_digits(total);
        let mut plan = Vec::with_capacity(total + 1);
        for tick in 0..=total {
            plan.push(ExportFrame {
                index: tick,
                file_name: format!("{tick:0digits$}.png"),
                frame: self.frame_at(tick)?,
            });
        }
        log::debug!("planned {} export frames ({digits}-digit names)", plan.len());
        Ok(plan)
    }
}

/// Pad width for export file names: `1 + floor(log10(total))`.
fn export_digits(total: usize) -> usize {
    1 + (total.max(1) as f64).log10().floor() as usize
}

/// Where a playback run currently is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Not started, or reset.
    #[default]
    Idle,
    Running,
    Paused,
    /// Terminal keyframe rendered; ticking is a no-op until restarted.
    Finished,
}

/// Mutable playback position, owned by the caller and passed into the tick
/// functions. One [`Animation`] can drive any number of independent
/// playback states.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Next global tick to render.
    pub tick: usize,
    /// Remaining ticks the current keyframe stays held on screen.
    pub hold: u32,
    pub phase: Phase,
}

impl PlaybackState {
    /// Suspend ticking, keeping the position.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Resume a paused run where it left off.
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// Drop back to idle, clearing position and any pending hold.
    pub fn reset(&mut self) {
        *self = PlaybackState::default();
    }
}

/// What one tick asks the rendering backend to do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TickDraw {
    /// Compile and draw this frame.
    Frame(Frame),
    /// Update persistent buffers from this index into the prerendered list
    /// and redraw.
    Fast(usize),
    /// Keep the previous frame on screen.
    Hold,
    /// Nothing to draw: idle, paused, or finished.
    Idle,
}

/// One planned export frame: global tick index, zero-padded file name, and
/// the frame to render into it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportFrame {
    pub index: usize,
    pub file_name: String,
    pub frame: Frame,
}
