use anchor_lang::prelude::*;
use crate::constants::DISTRIBUTOR_CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::states::DistributorConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Deployer paying for the config account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Distributor configuration PDA
    #[account(
        init,
        payer = payer,
        space = DistributorConfig::DISCRIMINATOR.len() + DistributorConfig::INIT_SPACE,
        seeds = [DISTRIBUTOR_CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, DistributorConfig>,

    /// System program
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    /// Wallet receiving the protocol share of every distribution
    pub protocol_wallet: Pubkey,
}

impl<'info> Initialize<'info> {
    pub fn handle(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        msg!("Initializing token distributor");

        require!(
            params.protocol_wallet != Pubkey::default(),
            ErrorCode::InvalidProtocolWallet
        );

        let config_key = ctx.accounts.config.key();
        let config = &mut ctx.accounts.config;

        config.protocol_wallet = params.protocol_wallet;
        config.total_distributions = 0;
        config.bump = ctx.bumps.config;

        msg!("Protocol wallet: {}", params.protocol_wallet);

        emit!(crate::events::DistributorInitialized {
            config: config_key,
            protocol_wallet: params.protocol_wallet,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
