/// Single "which modal is open, with what payload" state.
///
/// Opening while something is already open replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState<K, D> {
    pub is_open: bool,
    pub kind: Option<K>,
    pub data: Option<D>,
}

impl<K, D> Default for ModalState<K, D> {
    fn default() -> Self {
        Self {
            is_open: false,
            kind: None,
            data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction<K, D> {
    Open { kind: K, data: Option<D> },
    Close,
}

impl<K: PartialEq, D> ModalState<K, D> {
    pub fn reduce(self, action: ModalAction<K, D>) -> Self {
        match action {
            ModalAction::Open { kind, data } => Self {
                is_open: true,
                kind: Some(kind),
                data,
            },
            ModalAction::Close => Self::default(),
        }
    }

    pub fn is_visible(&self, kind: &K) -> bool {
        self.is_open && self.kind.as_ref() == Some(kind)
    }

    pub fn data_for(&self, kind: &K) -> Option<&D> {
        if self.is_visible(kind) {
            self.data.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Kind {
        Customer,
        Sale,
    }

    #[test]
    fn last_open_wins() {
        let state = ModalState::<Kind, u32>::default()
            .reduce(ModalAction::Open {
                kind: Kind::Customer,
                data: Some(1),
            })
            .reduce(ModalAction::Open {
                kind: Kind::Sale,
                data: Some(2),
            });
        assert!(!state.is_visible(&Kind::Customer));
        assert!(state.is_visible(&Kind::Sale));
        assert_eq!(state.data_for(&Kind::Sale), Some(&2));
        assert_eq!(state.data_for(&Kind::Customer), None);
    }

    #[test]
    fn close_drops_payload() {
        let state = ModalState::<Kind, u32>::default()
            .reduce(ModalAction::Open {
                kind: Kind::Sale,
                data: Some(9),
            })
            .reduce(ModalAction::Close);
        assert!(!state.is_open);
        assert_eq!(state.kind, None);
        assert_eq!(state.data, None);
    }
}
