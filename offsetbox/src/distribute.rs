//! One-dimensional offset distribution.
//!
//! Both functions are written as if boxes were packed horizontally: items are
//! `(width, xdescent)` pairs. Packers reuse them for the vertical axis by
//! passing `(height, ydescent)` pairs instead.

use crate::error::{LayoutError, Result};
use crate::policy::{Align, PackMode};

/// Result of [`pack_offsets`].
#[derive(Debug, Clone, PartialEq)]
pub struct Packed {
    /// Total length along the packing axis.
    pub total: f32,
    /// Start offset of every item, in input order.
    pub offsets: Vec<f32>,
}

/// Result of [`aligned_offsets`].
#[derive(Debug, Clone, PartialEq)]
pub struct Aligned {
    /// Resolved length along the cross axis.
    pub size: f32,
    /// Descent of the aligned group.
    pub descent: f32,
    /// Offset of every item, in input order.
    pub offsets: Vec<f32>,
}

pub(crate) fn max_of(values: impl Iterator<Item = f32>) -> f32 {
    values.fold(f32::NEG_INFINITY, f32::max)
}

fn cumulative(sizes: &[f32], sep: f32) -> Vec<f32> {
    let mut cursor = 0.0;
    sizes
        .iter()
        .map(|size| {
            let offset = cursor;
            cursor += size + sep;
            offset
        })
        .collect()
}

/// Compute the total length and start offsets of `items` packed along one axis.
///
/// Descents are ignored by every mode.
pub fn pack_offsets(items: &[(f32, f32)], total: Option<f32>, sep: f32, mode: PackMode) -> Result<Packed> {
    let sizes: Vec<f32> = items.iter().map(|&(size, _)| size).collect();
    let n = sizes.len();

    match mode {
        PackMode::Fixed => {
            let offsets = cumulative(&sizes, sep);
            let total = total.unwrap_or_else(|| {
                if n == 0 {
                    0.0
                } else {
                    sizes.iter().sum::<f32>() + sep * (n - 1) as f32
                }
            });
            Ok(Packed { total, offsets })
        }
        PackMode::Expand => {
            let Some(total) = total else {
                tracing::debug!("expand packing of {} items without a target length", n);
                return Err(LayoutError::ExpandWithoutTotal);
            };
            if n < 2 {
                tracing::debug!("expand packing needs two items, got {}", n);
                return Err(LayoutError::ExpandNeedsTwoItems(n));
            }
            let sep = (total - sizes.iter().sum::<f32>()) / (n - 1) as f32;
            Ok(Packed {
                total,
                offsets: cumulative(&sizes, sep),
            })
        }
        PackMode::Equal => {
            if n == 0 {
                return Ok(Packed {
                    total: total.unwrap_or(0.0),
                    offsets: Vec::new(),
                });
            }
            let max_size = max_of(sizes.iter().copied());
            let (total, sep) = match total {
                Some(total) => (total, total / n as f32 - max_size),
                None => ((max_size + sep) * n as f32, sep),
            };
            let slot = max_size + sep;
            Ok(Packed {
                total,
                offsets: (0..n).map(|i| slot * i as f32).collect(),
            })
        }
    }
}

/// Align `items` on the cross axis.
///
/// When `target` is `None` it defaults to the largest item size. Baseline
/// alignment ignores the target and derives the size from the items.
pub fn aligned_offsets(items: &[(f32, f32)], target: Option<f32>, align: Align) -> Aligned {
    if items.is_empty() {
        return Aligned {
            size: target.unwrap_or(0.0),
            descent: 0.0,
            offsets: Vec::new(),
        };
    }

    let target = target.unwrap_or_else(|| max_of(items.iter().map(|&(size, _)| size)));

    match align {
        Align::Baseline => {
            let above = max_of(items.iter().map(|&(size, descent)| size - descent));
            let descent = max_of(items.iter().map(|&(_, descent)| descent));
            Aligned {
                size: above + descent,
                descent,
                offsets: vec![0.0; items.len()],
            }
        }
        Align::Left | Align::Top => Aligned {
            size: target,
            descent: 0.0,
            offsets: items.iter().map(|&(_, descent)| descent).collect(),
        },
        Align::Right | Align::Bottom => Aligned {
            size: target,
            descent: 0.0,
            offsets: items
                .iter()
                .map(|&(size, descent)| target - size + descent)
                .collect(),
        },
        Align::Center => Aligned {
            size: target,
            descent: 0.0,
            offsets: items
                .iter()
                .map(|&(size, descent)| (target - size) * 0.5 + descent)
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(sizes: &[f32]) -> Vec<(f32, f32)> {
        sizes.iter().map(|&s| (s, 0.0)).collect()
    }

    #[test]
    fn test_fixed_running_sum() {
        let packed = pack_offsets(&items(&[10.0, 20.0, 5.0]), None, 3.0, PackMode::Fixed).unwrap();
        assert_eq!(packed.offsets, vec![0.0, 13.0, 36.0]);
        assert_eq!(packed.total, 41.0);
    }

    #[test]
    fn test_fixed_keeps_explicit_total() {
        let packed = pack_offsets(&items(&[10.0, 20.0]), Some(100.0), 3.0, PackMode::Fixed).unwrap();
        assert_eq!(packed.offsets, vec![0.0, 13.0]);
        assert_eq!(packed.total, 100.0);
    }

    #[test]
    fn test_fixed_ignores_descent() {
        let with = pack_offsets(&[(10.0, 4.0), (20.0, 7.0)], None, 1.0, PackMode::Fixed).unwrap();
        let without = pack_offsets(&items(&[10.0, 20.0]), None, 1.0, PackMode::Fixed).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_expand_two_items() {
        let packed = pack_offsets(&items(&[10.0, 10.0]), Some(100.0), 0.0, PackMode::Expand).unwrap();
        assert_eq!(packed.total, 100.0);
        assert_eq!(packed.offsets, vec![0.0, 90.0]);
    }

    #[test]
    fn test_expand_overrides_sep() {
        let packed = pack_offsets(&items(&[10.0, 20.0, 30.0]), Some(80.0), 99.0, PackMode::Expand).unwrap();
        assert_eq!(packed.offsets, vec![0.0, 20.0, 50.0]);
    }

    #[test]
    fn test_expand_single_item_is_error() {
        let err = pack_offsets(&items(&[10.0]), Some(100.0), 0.0, PackMode::Expand).unwrap_err();
        assert_eq!(err, LayoutError::ExpandNeedsTwoItems(1));
    }

    #[test]
    fn test_expand_without_total_is_error() {
        let err = pack_offsets(&items(&[10.0, 10.0]), None, 0.0, PackMode::Expand).unwrap_err();
        assert_eq!(err, LayoutError::ExpandWithoutTotal);
    }

    #[test]
    fn test_equal_uniform_steps() {
        let packed = pack_offsets(&items(&[4.0, 12.0, 8.0, 1.0]), None, 2.0, PackMode::Equal).unwrap();
        assert_eq!(packed.total, 56.0);
        for pair in packed.offsets.windows(2) {
            assert_eq!(pair[1] - pair[0], 14.0);
        }
    }

    #[test]
    fn test_equal_back_derives_sep() {
        let packed = pack_offsets(&items(&[10.0, 20.0]), Some(100.0), 0.0, PackMode::Equal).unwrap();
        assert_eq!(packed.total, 100.0);
        assert_eq!(packed.offsets, vec![0.0, 50.0]);
    }

    #[test]
    fn test_empty_items() {
        for mode in [PackMode::Fixed, PackMode::Equal] {
            let packed = pack_offsets(&[], None, 5.0, mode).unwrap();
            assert_eq!(packed.total, 0.0);
            assert!(packed.offsets.is_empty());
        }
        let aligned = aligned_offsets(&[], None, Align::Center);
        assert_eq!(aligned.size, 0.0);
        assert!(aligned.offsets.is_empty());
    }

    #[test]
    fn test_baseline_alignment() {
        let aligned = aligned_offsets(&[(10.0, 2.0), (6.0, 4.0), (12.0, 0.0)], None, Align::Baseline);
        // max(8, 2, 12) + max(2, 4, 0)
        assert_eq!(aligned.size, 16.0);
        assert_eq!(aligned.descent, 4.0);
        assert_eq!(aligned.offsets, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_left_alignment_uses_own_descent() {
        let aligned = aligned_offsets(&[(10.0, 2.0), (6.0, 4.0)], None, Align::Left);
        assert_eq!(aligned.size, 10.0);
        assert_eq!(aligned.descent, 0.0);
        assert_eq!(aligned.offsets, vec![2.0, 4.0]);
    }

    #[test]
    fn test_bottom_alignment() {
        let aligned = aligned_offsets(&[(10.0, 2.0), (6.0, 1.0)], Some(20.0), Align::Bottom);
        assert_eq!(aligned.size, 20.0);
        assert_eq!(aligned.offsets, vec![12.0, 15.0]);
    }

    #[test]
    fn test_center_alignment_equal_sizes() {
        let aligned = aligned_offsets(&[(10.0, 0.0), (10.0, 0.0)], Some(30.0), Align::Center);
        assert_eq!(aligned.offsets[0], aligned.offsets[1]);
        assert_eq!(aligned.offsets[0], 10.0);
    }
}
