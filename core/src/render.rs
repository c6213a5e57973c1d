use crate::models::ChatMessage;
use crate::view::ChatView;

/// How a message bubble is drawn, decided by who sent it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubbleKind {
    /// Composed here: right-aligned, dark bubble, no avatar.
    Outgoing,
    /// Anyone else: left-aligned, light bubble, avatar icon.
    Incoming,
}

impl BubbleKind {
    pub fn of(message: &ChatMessage, local_user: &str) -> Self {
        if message.is_from(local_user) {
            BubbleKind::Outgoing
        } else {
            BubbleKind::Incoming
        }
    }

    pub fn row_class(self) -> &'static str {
        match self {
            BubbleKind::Outgoing => "chat-row outgoing",
            BubbleKind::Incoming => "chat-row incoming",
        }
    }

    pub fn bubble_class(self) -> &'static str {
        match self {
            BubbleKind::Outgoing => "bubble bubble-outgoing",
            BubbleKind::Incoming => "bubble bubble-incoming",
        }
    }

    pub fn shows_avatar(self) -> bool {
        matches!(self, BubbleKind::Incoming)
    }
}

/// What sits above the history in the scroll region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopSlot {
    Loader,
    Placeholder,
}

impl TopSlot {
    pub fn for_view(view: &ChatView) -> Self {
        if view.is_loading() {
            TopSlot::Loader
        } else {
            TopSlot::Placeholder
        }
    }
}

/// Static trip metadata shown in the header.
#[derive(Clone, Copy, Debug)]
pub struct TripHeader {
    pub group_name: &'static str,
    pub from: &'static str,
    pub from_detail: &'static str,
    pub to: &'static str,
}

pub const TRIP_HEADER: TripHeader = TripHeader {
    group_name: "Group Name",
    from: "IGI Airport",
    from_detail: ", T3",
    to: "Sector 28",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_user_gets_outgoing_bubble() {
        let mine = ChatMessage::new("me", "hello", "T2");
        let theirs = ChatMessage::new("a", "hi", "T1");

        assert_eq!(BubbleKind::of(&mine, "me"), BubbleKind::Outgoing);
        assert!(!BubbleKind::of(&mine, "me").shows_avatar());
        assert_eq!(BubbleKind::of(&theirs, "me"), BubbleKind::Incoming);
        assert!(BubbleKind::of(&theirs, "me").shows_avatar());
    }

    #[test]
    fn top_slot_follows_loading_flag() {
        let mut view = ChatView::new();
        assert_eq!(TopSlot::for_view(&view), TopSlot::Placeholder);
        view.set_loading(true);
        assert_eq!(TopSlot::for_view(&view), TopSlot::Loader);
    }
}
