//! Re-stacking after a drag: a released item is placed relative to the
//! siblings it now overlaps.
//!
//! For every other layer that intersects the released one, shares its
//! parent and is not one of its ancestors:
//!
//! * if the other layer fully contains the released one, the released one
//!   is stacked directly above it;
//! * otherwise the other layer is stacked directly above the released one.

#[cfg(test)]
#[path = "zorder_test.rs"]
mod zorder_test;

use crate::geom::Rect;
use crate::item::ItemId;

/// One entry of a bottom-to-top stacking order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub id: ItemId,
    pub parent: Option<ItemId>,
    pub rect: Rect,
}

/// Re-stack `stack` (bottom to top) around `released`. Returns the number of
/// moves performed; `0` also when `released` is not in the stack.
pub fn reconcile(stack: &mut Vec<Layer>, released: ItemId) -> usize {
    let Some(this) = stack.iter().find(|l| l.id == released).copied() else {
        return 0;
    };
    let colliding: Vec<Layer> = stack
        .iter()
        .filter(|other| {
            other.id != this.id
                && other.parent == this.parent
                && other.rect.intersects(&this.rect)
                && !is_ancestor(stack, other.id, this.id)
        })
        .copied()
        .collect();

    for other in &colliding {
        if other.rect.contains_rect(&this.rect) {
            stack_after(stack, this.id, other.id);
        } else {
            stack_after(stack, other.id, this.id);
        }
    }
    colliding.len()
}

/// Whether `candidate` is a (transitive) parent of `item`.
#[must_use]
pub fn is_ancestor(stack: &[Layer], candidate: ItemId, item: ItemId) -> bool {
    let parent_of = |id: ItemId| stack.iter().find(|l| l.id == id).and_then(|l| l.parent);
    let mut cursor = parent_of(item);
    // The walk is bounded by the stack length in case of a malformed cycle.
    for _ in 0..stack.len() {
        match cursor {
            Some(p) if p == candidate => return true,
            Some(p) => cursor = parent_of(p),
            None => return false,
        }
    }
    false
}

/// Move `moving` so it sits directly above `anchor`.
fn stack_after(stack: &mut Vec<Layer>, moving: ItemId, anchor: ItemId) {
    let Some(from) = stack.iter().position(|l| l.id == moving) else {
        return;
    };
    let layer = stack.remove(from);
    let to = stack.iter().position(|l| l.id == anchor).map_or(stack.len(), |i| i + 1);
    stack.insert(to, layer);
}
