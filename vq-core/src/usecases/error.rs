use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name must not be empty")]
    EmptyName,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Invalid vote type")]
    InvalidVoteType,
    #[error("Invalid QR code type")]
    InvalidQrType,
    #[error("Rarity level out of range")]
    InvalidRarity,
    #[error("Invalid milestone percentages")]
    InvalidMilestones,
    #[error("The amount must be positive")]
    InvalidAmount,
    #[error("The campaign is not active")]
    CampaignNotActive,
    #[error("The item does not belong to the campaign")]
    ItemNotInCampaign,
    #[error("You already voted for this item this week")]
    AlreadyVotedForItem,
    #[error("Weekly vote limit reached")]
    WeeklyVoteLimitReached,
    #[error("The wheel has no active rewards")]
    NoActiveRewards,
    #[error("QR code not found")]
    QrCodeNotFound,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<vq_entities::vote::VoteTypeParseError> for Error {
    fn from(_: vq_entities::vote::VoteTypeParseError) -> Self {
        Self::InvalidVoteType
    }
}

impl From<vq_entities::qr_code::QrTypeParseError> for Error {
    fn from(_: vq_entities::qr_code::QrTypeParseError) -> Self {
        Self::InvalidQrType
    }
}
