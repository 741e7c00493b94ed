//! UI Components for the proposal card.

mod celebration_view;
mod confetti_layer;
mod floating_backdrop;
mod following_heart;
mod proposal_card;
mod question_view;

pub use celebration_view::CelebrationView;
pub use confetti_layer::ConfettiLayer;
pub use floating_backdrop::FloatingBackdrop;
pub use following_heart::FollowingHeart;
pub use proposal_card::ProposalCard;
pub use question_view::QuestionView;
