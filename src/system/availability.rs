use crate::model::{RoomState, Span};

/// Free sub-windows of `query` once the room's bookings are punched
/// out. Result is sorted and disjoint; an empty vec means the room has
/// no free time in the window.
pub fn free_windows(room: &RoomState, query: &Span) -> Vec<Span> {
    let mut booked: Vec<Span> = room
        .overlapping(query)
        .map(|b| {
            Span::new(
                b.span.start.max(query.start),
                b.span.end.min(query.end),
            )
        })
        .collect();

    if booked.is_empty() {
        return vec![*query];
    }

    booked.sort_by_key(|s| s.start);
    let booked = merge_overlapping(&booked);
    subtract_intervals(&[*query], &booked)
}

/// Merge sorted overlapping/adjacent intervals into disjoint intervals.
pub fn merge_overlapping(sorted: &[Span]) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::new();
    for &span in sorted {
        if let Some(last) = merged.last_mut()
            && span.start <= last.end {
                last.end = last.end.max(span.end);
                continue;
            }
        merged.push(span);
    }
    merged
}

/// Subtract sorted disjoint `to_remove` intervals from sorted `base`.
pub fn subtract_intervals(base: &[Span], to_remove: &[Span]) -> Vec<Span> {
    let mut result = Vec::new();
    let mut ri = 0;

    for &b in base {
        let mut current_start = b.start;
        let current_end = b.end;

        while ri < to_remove.len() && to_remove[ri].end <= current_start {
            ri += 1;
        }

        let mut j = ri;
        while j < to_remove.len() && to_remove[j].start < current_end {
            let r = &to_remove[j];
            if r.start > current_start {
                result.push(Span::new(current_start, r.start));
            }
            current_start = current_start.max(r.end);
            j += 1;
        }

        if current_start < current_end {
            result.push(Span::new(current_start, current_end));
        }
    }

    result
}
