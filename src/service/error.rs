use crate::TokenId;
use crate::contract::ContractError;
use crate::engine::EngineError;

/// Failures surfaced to the UI layer
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("No pass minted for {owner}")]
    PassNotFound { owner: String },

    #[error("{owner} already holds pass #{token_id}")]
    PassAlreadyMinted { owner: String, token_id: TokenId },

    #[error("Pass #{token_id} is inactive")]
    PassInactive { token_id: TokenId },

    #[error("Contract call failed: {0:#}")]
    Contract(anyhow::Error),
}

impl ServiceError {
    /// Lift a failed contract call, keeping the rejections the contract types
    pub(crate) fn from_contract(err: anyhow::Error) -> Self {
        match err.downcast_ref::<ContractError>() {
            Some(ContractError::AlreadyMinted { owner, token_id }) => Self::PassAlreadyMinted {
                owner: owner.clone(),
                token_id: *token_id,
            },
            Some(ContractError::NoPass { owner }) => Self::PassNotFound {
                owner: owner.clone(),
            },
            None => Self::Contract(err),
        }
    }
}
