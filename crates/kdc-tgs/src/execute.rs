use krb_types::KerberosError;

use crate::context::{TgsContext, TgsDeps};
use crate::stages;

/// Runs the ten TGS stages in strict, non-reorderable order against `ctx`, populating
/// `ctx.reply` on success. The first stage to fail aborts the pipeline; nothing is retried.
///
/// The one side effect that survives a failed call is stage 6's replay-cache insertion: a request
/// replayed verbatim after some later stage fails is still rejected as a replay on its next
/// attempt. That is intentional, not a bug to paper over.
pub fn execute(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    let result = run_stages(ctx, deps);

    match &result {
        Ok(()) => tracing::debug!("TGS request succeeded"),
        Err(err) => tracing::warn!(error = %err, "TGS request failed"),
    }

    result
}

fn run_stages(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    stages::stage1_configure(ctx)?;
    stages::stage2_select_etype(ctx, deps)?;
    stages::stage3_extract_ap_req(ctx, deps)?;
    stages::stage4_verify_tgt_names(ctx, deps)?;
    stages::stage5_resolve_ticket_principal(ctx, deps)?;
    stages::stage6_verify_ap_req(ctx, deps)?;
    stages::stage7_verify_body_checksum(ctx, deps)?;
    stages::stage8_resolve_requested_server(ctx, deps)?;
    stages::stage9_construct_new_ticket(ctx, deps)?;
    stages::stage10_build_reply(ctx, deps)
}
