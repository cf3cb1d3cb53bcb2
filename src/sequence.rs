//! Per-property keyframe sequences.
//!
//! A sequence owns the ordered keyframe list for one animated property and
//! resolves a playback time to a value. Bracket lookup keeps a cursor and
//! scans a few segments around it before falling back to a binary search,
//! so continuous playback costs O(1) per call.

use log::debug;
use smallvec::SmallVec;

use crate::context::EvalContext;
use crate::errors::{CadenceError, Result};
use crate::keyframe::PropertyKeyframe;

const MAX_SCAN_OFFSET: usize = 3;
const MIN_SEGMENT: f32 = 1e-6;

/// Where playback last sampled.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    last_index: usize,
}

/// Ordered keyframe list for one animated property.
pub struct Sequence<K: PropertyKeyframe> {
    keyframes: SmallVec<[K; 4]>,
    cursor: Cursor,
    last_value: Option<K::Value>,
}

impl<K: PropertyKeyframe> Sequence<K> {
    /// Builds a sequence from keyframes ordered by non-decreasing time.
    /// Equal times are legal and resolve as instant snaps.
    pub fn new<I: IntoIterator<Item = K>>(keyframes: I) -> Result<Self> {
        let keyframes: SmallVec<[K; 4]> = keyframes.into_iter().collect();
        if keyframes.is_empty() {
            return Err(CadenceError::EmptySequence);
        }
        for (index, pair) in keyframes.windows(2).enumerate() {
            if pair[1].time() < pair[0].time() {
                return Err(CadenceError::UnsortedKeyframes { index: index + 1 });
            }
        }
        debug!("sequence built: {} keyframes", keyframes.len());
        Ok(Self {
            keyframes,
            cursor: Cursor::default(),
            last_value: None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Time of the last keyframe.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.keyframes[self.keyframes.len() - 1].time()
    }

    #[must_use]
    pub fn keyframe(&self, index: usize) -> Option<&K> {
        self.keyframes.get(index)
    }

    pub fn keyframe_mut(&mut self, index: usize) -> Option<&mut K> {
        self.keyframes.get_mut(index)
    }

    /// End-of-track accumulation.
    #[must_use]
    pub fn total(&self) -> K::Value {
        self.keyframes[self.keyframes.len() - 1].total_value()
    }

    /// Recomputes the relative-accumulation totals: a relative keyframe adds
    /// its resolved value to the running total, an absolute one replaces it.
    /// Call whenever the sequence is rebuilt (level reload, theme
    /// reassignment, track edit).
    pub fn recompute_totals(&mut self, ctx: &EvalContext<'_>) {
        let mut running = K::Value::default();
        for keyframe in &mut self.keyframes {
            let value = keyframe.current(ctx);
            running = if keyframe.is_relative() {
                running + value
            } else {
                value
            };
            keyframe.set_total_value(running);
        }
    }

    /// Resolves the property's value at `ctx.time`.
    ///
    /// Before the first keyframe the value clamps to the first keyframe's
    /// resolved value; past the last keyframe the last keyframe keeps
    /// resolving (homing keeps tracking). In between, the bracketing pair
    /// blends with the arriving keyframe's ease; a zero-length segment
    /// snaps straight to the arriving side.
    pub fn interpolate(&mut self, ctx: &EvalContext<'_>) -> K::Value {
        let time = ctx.time;
        let len = self.keyframes.len();

        if time < self.keyframes[0].time() {
            // Rewound past the start: shut down everything entered so far.
            let entered = self.cursor.last_index;
            for keyframe in &mut self.keyframes[..=entered] {
                if keyframe.is_active() {
                    keyframe.stop();
                }
            }
            self.cursor.last_index = 0;
            let value = self.keyframes[0].current(ctx);
            self.last_value = Some(value);
            return value;
        }

        let previous = self.cursor.last_index;
        let index = self.locate(time);

        // Activation bookkeeping rides the cursor: stop keyframes left
        // behind by a backward seek, start the ones newly crossed.
        if index < previous {
            for keyframe in &mut self.keyframes[index + 1..=previous] {
                if keyframe.is_active() {
                    keyframe.stop();
                }
            }
        }
        for j in previous.min(index)..=index {
            if !self.keyframes[j].is_active() {
                self.start_keyframe(j, ctx);
            }
        }

        let value = if index >= len - 1 {
            self.keyframes[len - 1].get_value(ctx)
        } else {
            let (head, tail) = self.keyframes.split_at_mut(index + 1);
            let k0 = &mut head[index];
            let k1 = &mut tail[0];
            let span = k1.time() - k0.time();
            let t = if span > MIN_SEGMENT {
                ((time - k0.time()) / span).clamp(0.0, 1.0)
            } else {
                1.0
            };
            k0.interpolate(k1, t, ctx)
        };
        self.last_value = Some(value);
        value
    }

    fn start_keyframe(&mut self, index: usize, ctx: &EvalContext<'_>) {
        let current = self
            .last_value
            .unwrap_or_else(|| self.keyframes[index].current(ctx));
        let (head, tail) = self.keyframes.split_at_mut(index);
        tail[0].start(head.last(), current, ctx);
    }

    /// Index of the last keyframe with `time() <= time`: bounded linear
    /// scan around the cursor, binary-search fallback on a large jump.
    fn locate(&mut self, time: f32) -> usize {
        let len = self.keyframes.len();
        if len == 1 {
            self.cursor.last_index = 0;
            return 0;
        }

        let i = self.cursor.last_index.min(len - 1);
        let t_curr = self.keyframes[i].time();

        let found = if time >= t_curr {
            // Normal playback: scan forward a few segments.
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    if time >= self.keyframes[len - 1].time() {
                        res = Some(len - 1);
                    }
                    break;
                }
                if time < self.keyframes[idx + 1].time() {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Rewind: scan backward.
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                if i < offset {
                    break;
                }
                let idx = i - offset;
                if time >= self.keyframes[idx].time() {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let index = match found {
            Some(idx) => idx,
            None => {
                // Scrub or loop reset: global binary search.
                let next = self.keyframes.partition_point(|k| k.time() <= time);
                next.saturating_sub(1)
            }
        };
        self.cursor.last_index = index;
        index
    }
}
