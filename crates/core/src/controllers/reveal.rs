use folio_protocol::{DomCommand, ElementRef, StateMarker};

/// One-shot reveal of elements as they scroll into view.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    revealed: Vec<bool>,
}

impl ScrollReveal {
    pub fn new(target_count: usize) -> Self {
        Self {
            revealed: vec![false; target_count],
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Handle one intersection entry. The first intersecting entry marks the
    /// target visible and stops observing it; anything after is ignored.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> Vec<DomCommand> {
        if !is_intersecting {
            return Vec::new();
        }
        let Some(revealed) = self.revealed.get_mut(index) else {
            return Vec::new();
        };
        if *revealed {
            return Vec::new();
        }
        *revealed = true;
        let target = ElementRef::RevealTarget(index);
        vec![
            DomCommand::SetMarker {
                target,
                marker: StateMarker::Visible,
                on: true,
            },
            DomCommand::Unobserve { target },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_reveals_and_unobserves() {
        let mut reveal = ScrollReveal::new(2);
        let cmds = reveal.on_intersection(1, true);
        assert_eq!(cmds.len(), 2);
        assert!(matches!(cmds[1], DomCommand::Unobserve { target: ElementRef::RevealTarget(1) }));
        assert!(reveal.is_revealed(1));
        assert!(!reveal.is_revealed(0));
    }

    #[test]
    fn reveals_at_most_once() {
        let mut reveal = ScrollReveal::new(1);
        assert!(!reveal.on_intersection(0, true).is_empty());
        for _ in 0..3 {
            assert!(reveal.on_intersection(0, false).is_empty());
            assert!(reveal.on_intersection(0, true).is_empty());
        }
        assert_eq!(reveal.revealed_count(), 1);
    }

    #[test]
    fn never_intersecting_stays_hidden() {
        let mut reveal = ScrollReveal::new(1);
        assert!(reveal.on_intersection(0, false).is_empty());
        assert!(!reveal.is_revealed(0));
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut reveal = ScrollReveal::new(1);
        assert!(reveal.on_intersection(5, true).is_empty());
        assert!(!reveal.is_revealed(5));
    }
}
