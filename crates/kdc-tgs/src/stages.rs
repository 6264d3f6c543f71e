use krb_types::constants::key_usages;
use krb_types::{EncKdcRepPart, EncTicketPart, KdcOptions, KerberosError, PrincipalName, Ticket, TicketFlags};

use crate::collaborators::CollabError;
use crate::context::{TgsContext, TgsDeps};
use crate::flag_algebra;
use crate::time_algebra;

/// Collaborator failures don't carry their own RFC 4120 code — each call site knows which code a
/// failure there maps to. These two mappings cover everywhere a collaborator is consulted in this
/// pipeline; `CollabError::Other` always falls through to `KerberosError::Internal`.
fn decode_or_decrypt_error(err: CollabError) -> KerberosError {
    match err {
        CollabError::DecryptionFailed => KerberosError::ApErrModified,
        other => KerberosError::Internal(other.to_string()),
    }
}

fn store_lookup_error(err: CollabError) -> KerberosError {
    match err {
        CollabError::NotFound => KerberosError::SPrincipalUnknown,
        other => KerberosError::Internal(other.to_string()),
    }
}

/// **Stage 1 — Configure.**
pub(crate) fn stage1_configure(ctx: &mut TgsContext) -> Result<(), KerberosError> {
    if ctx.request.pvno != 5 {
        return Err(KerberosError::BadPvno);
    }
    Ok(())
}

/// **Stage 2 — Select encryption type.**
pub(crate) fn stage2_select_etype(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    let selected = deps
        .config
        .encryption_types
        .iter()
        .find(|preferred| ctx.request.req_body.etype.contains(preferred))
        .copied()
        .ok_or(KerberosError::EtypeNoSupp)?;

    tracing::debug!(etype = ?selected, "selected encryption type");
    ctx.selected_etype = Some(selected);
    Ok(())
}

/// **Stage 3 — Extract AP-REQ.**
pub(crate) fn stage3_extract_ap_req(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    if ctx.request.pa_data.is_empty() {
        return Err(KerberosError::PadataTypeNoSupp);
    }

    let pa_tgs_req = ctx
        .request
        .pa_data
        .iter()
        .find(|pa| pa.is_tgs_req())
        .ok_or(KerberosError::PadataTypeNoSupp)?;

    let ap_req = deps
        .codec
        .decode_application_request(&pa_tgs_req.padata_value)
        .map_err(decode_or_decrypt_error)?;

    ctx.tgt = Some(ap_req.ticket.clone());
    ctx.ap_req = Some(ap_req);
    Ok(())
}

/// **Stage 4 — Verify TGT realm and server name.**
pub(crate) fn stage4_verify_tgt_names(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    let tgt = ctx.tgt.as_ref().expect("stage 3 populated the TGT");

    if tgt.realm != deps.config.primary_realm {
        return Err(KerberosError::ApErrNotUs);
    }

    let is_own_tgs = tgt.sname == PrincipalName::krbtgt(deps.config.primary_realm.clone());
    let is_requested_server = tgt.sname == ctx.request.req_body.sname;
    if !is_own_tgs && !is_requested_server {
        return Err(KerberosError::ApErrNotUs);
    }

    Ok(())
}

/// **Stage 5 — Resolve ticket principal.**
pub(crate) fn stage5_resolve_ticket_principal(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    let tgt = ctx.tgt.as_ref().expect("stage 3 populated the TGT");
    let entry = deps.principal_store.lookup(&tgt.sname).map_err(store_lookup_error)?;
    ctx.tgt_server_entry = Some(entry);
    Ok(())
}

/// **Stage 6 — Verify AP-REQ.** Decrypts the TGT and the authenticator, then runs the ordered
/// checks from the spec: cname/crealm match, clock skew, replay, client address, with `VALIDATE`
/// bypassing nothing here — only the lifetime checks stage 9 performs for a normal ticket.
pub(crate) fn stage6_verify_ap_req(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    let tgt_entry = ctx
        .tgt_server_entry
        .as_ref()
        .expect("stage 5 resolved the TGT server entry")
        .clone();

    let tgt_enc_part = ctx
        .tgt
        .as_ref()
        .expect("stage 3 populated the TGT")
        .encrypted()
        .expect("TGT body is still sealed at this point")
        .clone();

    let tgt_key = tgt_entry
        .key_for(tgt_enc_part.etype)
        .ok_or(KerberosError::SPrincipalUnknown)?;

    let tgt_plaintext = deps
        .cipher
        .unseal(tgt_key, &tgt_enc_part, key_usages::TICKET_SEAL)
        .map_err(decode_or_decrypt_error)?;
    let tgt_body = deps
        .codec
        .decode_enc_ticket_part(&tgt_plaintext)
        .map_err(decode_or_decrypt_error)?;

    let ap_req = ctx.ap_req.as_ref().expect("stage 3 populated the AP-REQ");
    let authenticator_plaintext = deps
        .cipher
        .unseal(&tgt_body.key, &ap_req.authenticator, key_usages::TGS_REQ_AP_REQ_AUTHENTICATOR)
        .map_err(decode_or_decrypt_error)?;
    let authenticator = deps
        .codec
        .decode_authenticator(&authenticator_plaintext)
        .map_err(decode_or_decrypt_error)?;

    if authenticator.cname != tgt_body.cname || authenticator.crealm != tgt_body.crealm {
        return Err(KerberosError::ApErrBadmatch);
    }

    if !authenticator.ctime.is_in_clock_skew_of(ctx.now, deps.config.allowable_clock_skew) {
        return Err(KerberosError::ApErrSkew);
    }

    let first_seen = deps
        .replay_cache
        .check_authenticator(&authenticator)
        .map_err(|e| KerberosError::Internal(e.to_string()))?;
    if !first_seen {
        return Err(KerberosError::ApErrRepeat);
    }

    // The empty-addresses policy is keyed on the TGT's own address list, not on whether the
    // transport happened to expose the caller's address: a ticket with no address restriction is
    // only acceptable when the deployment allows it, regardless of what's known about the caller.
    if tgt_body.client_addresses.is_empty() {
        if !deps.config.empty_addresses_allowed {
            return Err(KerberosError::ApErrBadaddr);
        }
    } else if let Some(client_address) = &ctx.client_address {
        if !tgt_body.client_addresses.contains(client_address) {
            return Err(KerberosError::ApErrBadaddr);
        }
    }

    ctx.tgt.as_mut().expect("TGT present").set_decrypted(tgt_body);
    ctx.authenticator = Some(authenticator);
    Ok(())
}

/// **Stage 7 — Verify body checksum.**
pub(crate) fn stage7_verify_body_checksum(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    if !deps.config.body_checksum_verified {
        return Ok(());
    }

    let authenticator = ctx.authenticator.as_ref().expect("stage 6 populated the authenticator");
    let tgt_body = ctx
        .tgt
        .as_ref()
        .expect("stage 6 decrypted the TGT")
        .decrypted()
        .expect("TGT decrypted by stage 6");

    let cksum = authenticator
        .cksum
        .as_ref()
        .filter(|c| !c.checksum.is_empty())
        .ok_or(KerberosError::ApErrInappCksum)?;
    if ctx.request.body_bytes.is_empty() {
        return Err(KerberosError::ApErrInappCksum);
    }

    deps.checksum
        .verify(cksum, &ctx.request.body_bytes, &tgt_body.key, key_usages::TGS_REQ_BODY_CHECKSUM)
        .map_err(|_| KerberosError::ApErrModified)
}

/// **Stage 8 — Resolve requested server principal.**
pub(crate) fn stage8_resolve_requested_server(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    let entry = deps
        .principal_store
        .lookup(&ctx.request.req_body.sname)
        .map_err(store_lookup_error)?;
    ctx.requested_server_entry = Some(entry);
    Ok(())
}

fn build_transited(tgt_body: &EncTicketPart, config: &crate::config::TgsConfig) -> Result<krb_types::TransitedEncoding, KerberosError> {
    if tgt_body.transited.tr_type != krb_types::TransitedEncoding::DOMAIN_X500_COMPRESS {
        return Err(KerberosError::TrtypeNoSupp);
    }
    if tgt_body.crealm == config.primary_realm {
        Ok(tgt_body.transited.clone())
    } else {
        Ok(krb_types::TransitedEncoding::local(&tgt_body.crealm))
    }
}

fn build_authorization_data(
    ctx: &TgsContext,
    deps: &TgsDeps<'_>,
    tgt_body: &EncTicketPart,
) -> Result<krb_types::AuthorizationData, KerberosError> {
    let Some(enc_ad) = &ctx.request.req_body.enc_authorization_data else {
        return Ok(tgt_body.authorization_data.clone());
    };

    let authenticator = ctx.authenticator.as_ref().expect("stage 6 populated the authenticator");
    let key = authenticator.subkey.as_ref().unwrap_or(&tgt_body.key);

    let plaintext = deps
        .cipher
        .unseal(key, enc_ad, key_usages::TGS_REQ_AUTHORIZATION_DATA)
        .map_err(decode_or_decrypt_error)?;
    let mut requested = deps
        .codec
        .decode_authorization_data(&plaintext)
        .map_err(decode_or_decrypt_error)?;

    requested.extend(tgt_body.authorization_data.iter().cloned());
    Ok(requested)
}

/// **Stage 9 — Construct new ticket.** Refuses `ENC-TKT-IN-SKEY` and any `RESERVED-*` bit
/// outright, then branches on `VALIDATE` (a straight copy-and-unseal of the TGT body) versus the
/// ordinary path (flag algebra, transited encoding, authorization data, time algebra, sealing).
pub(crate) fn stage9_construct_new_ticket(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    let kdc_options = ctx.request.req_body.kdc_options;

    if kdc_options.has_any_reserved() {
        return Err(KerberosError::BadOption);
    }
    if kdc_options.contains(KdcOptions::ENC_TKT_IN_SKEY) {
        return Err(KerberosError::BadOption);
    }
    if kdc_options.contains(KdcOptions::VALIDATE) && kdc_options.contains(KdcOptions::RENEW) {
        return Err(KerberosError::BadOption);
    }

    let tgt_body = ctx
        .tgt
        .as_ref()
        .expect("stage 6 decrypted the TGT")
        .decrypted()
        .expect("TGT decrypted by stage 6")
        .clone();

    let new_body = if kdc_options.contains(KdcOptions::VALIDATE) {
        if !tgt_body.flags.contains(TicketFlags::INVALID) {
            return Err(KerberosError::Policy);
        }
        if tgt_body.start_or_auth_time() > ctx.now {
            return Err(KerberosError::ApErrTktNyv);
        }
        let mut body = tgt_body.clone();
        body.flags.remove(TicketFlags::INVALID);
        body
    } else {
        let flag_outcome =
            flag_algebra::apply_flag_rules(deps.config, kdc_options, &tgt_body, &ctx.request.req_body.addresses)?;
        let transited = build_transited(&tgt_body, deps.config)?;
        let authorization_data = build_authorization_data(ctx, deps, &tgt_body)?;
        let times = time_algebra::compute_times(deps.config, ctx.now, kdc_options, &ctx.request.req_body, &tgt_body)?;

        // RENEWABLE sits outside the table-driven flag rules: it's set exactly when the time
        // algebra found a renewTill worth honoring (direct RENEWABLE request, or an upgrade via
        // RENEWABLE-OK), which already required both the option and the TGT's own capability.
        // `effective_options` alone isn't enough here: a direct RENEWABLE request against a TGT
        // that lacks RENEWABLE leaves the option bit set but `renewTill` unset, and the flag must
        // track the latter or the ticket would claim renewability it can't honor.
        let mut flags = flag_outcome.flags;
        if times.renew_till.is_some() {
            flags |= TicketFlags::RENEWABLE;
        }

        EncTicketPart {
            flags,
            key: deps
                .random_key_factory
                .random(ctx.selected_etype.expect("stage 2 selected an etype"))
                .map_err(|e| KerberosError::Internal(e.to_string()))?,
            crealm: tgt_body.crealm.clone(),
            cname: tgt_body.cname.clone(),
            transited,
            auth_time: times.auth_time,
            start_time: Some(times.start_time),
            end_time: times.end_time,
            renew_till: times.renew_till,
            client_addresses: flag_outcome.client_addresses,
            authorization_data,
        }
    };

    ctx.new_session_key = Some(new_body.key.clone());

    let server_entry = ctx
        .requested_server_entry
        .as_ref()
        .expect("stage 8 resolved the requested server");
    let etype = ctx.selected_etype.expect("stage 2 selected an etype");
    let server_key = server_entry.key_for(etype).ok_or(KerberosError::EtypeNoSupp)?;

    let plaintext = deps
        .codec
        .encode_enc_ticket_part(&new_body)
        .map_err(|e| KerberosError::Internal(e.to_string()))?;
    let sealed = deps
        .cipher
        .seal(server_key, &plaintext, key_usages::TICKET_SEAL)
        .map_err(decode_or_decrypt_error)?;

    let mut new_ticket = Ticket::new_sealed(deps.config.primary_realm.clone(), ctx.request.req_body.sname.clone(), sealed);
    new_ticket.set_decrypted(new_body);
    ctx.new_ticket = Some(new_ticket);

    Ok(())
}

/// **Stage 10 — Build reply.**
pub(crate) fn stage10_build_reply(ctx: &mut TgsContext, deps: &TgsDeps<'_>) -> Result<(), KerberosError> {
    let new_ticket = ctx.new_ticket.as_ref().expect("stage 9 built the new ticket");
    let new_body = new_ticket.decrypted().expect("stage 9 leaves the new ticket decrypted");
    let session_key = ctx.new_session_key.clone().expect("stage 9 recorded the session key");

    let enc_part = EncKdcRepPart {
        key: session_key,
        last_req: Vec::new(),
        nonce: ctx.request.req_body.nonce,
        flags: new_body.flags,
        auth_time: new_body.auth_time,
        start_time: new_body.start_time,
        end_time: new_body.end_time,
        renew_till: new_body.renew_till,
        srealm: deps.config.primary_realm.clone(),
        sname: new_ticket.sname.clone(),
        caddr: new_body.client_addresses.clone(),
    };

    let authenticator = ctx.authenticator.as_ref().expect("stage 6 populated the authenticator");
    let tgt_body = ctx
        .tgt
        .as_ref()
        .expect("stage 6 decrypted the TGT")
        .decrypted()
        .expect("TGT decrypted by stage 6");

    let (key, key_usage) = match &authenticator.subkey {
        Some(subkey) => (subkey, key_usages::TGS_REP_SUBKEY),
        None => (&tgt_body.key, key_usages::TGS_REP_SESSION_KEY),
    };

    let plaintext = deps
        .codec
        .encode_enc_kdc_rep_part(&enc_part)
        .map_err(|e| KerberosError::Internal(e.to_string()))?;
    let sealed_enc_part = deps.cipher.seal(key, &plaintext, key_usage).map_err(decode_or_decrypt_error)?;

    ctx.reply = Some(krb_types::TgsRep {
        pvno: 5,
        msg_type: krb_types::constants::types::TGS_REP_MSG_TYPE,
        crealm: tgt_body.crealm.clone(),
        cname: tgt_body.cname.clone(),
        ticket: new_ticket.clone(),
        enc_part: sealed_enc_part,
    });

    Ok(())
}
