use krb_types::{EncTicketPart, KdcOptions, KerberosError, KerberosTime, KdcReqBody};

use crate::config::TgsConfig;

pub(crate) struct TimeOutcome {
    pub(crate) auth_time: KerberosTime,
    pub(crate) start_time: KerberosTime,
    pub(crate) end_time: KerberosTime,
    pub(crate) renew_till: Option<KerberosTime>,
}

fn effective_till(request_till: KerberosTime) -> KerberosTime {
    if request_till.is_zero() {
        KerberosTime::INFINITY
    } else {
        request_till
    }
}

fn compute_start_time(
    config: &TgsConfig,
    now: KerberosTime,
    from: Option<KerberosTime>,
    postdated: bool,
    tgt_body: &EncTicketPart,
) -> Result<KerberosTime, KerberosError> {
    let Some(from) = from else {
        return Ok(now);
    };

    if from <= now {
        return Ok(now);
    }

    let within_skew = from.is_in_clock_skew_of(now, config.allowable_clock_skew);

    if within_skew && !postdated {
        return Ok(now);
    }

    if !within_skew && (!postdated || !tgt_body.flags.contains(krb_types::TicketFlags::MAY_POSTDATE)) {
        return Err(KerberosError::CannotPostdate);
    }

    Ok(from)
}

/// Implements stage 9's time algebra exactly as specified: `authTime`/`startTime` derivation,
/// the `RENEW` vs. ordinary `endTime` branches, the `RENEWABLE-OK` upgrade, `renewTill`, and the
/// final sanity check.
pub(crate) fn compute_times(
    config: &TgsConfig,
    now: KerberosTime,
    kdc_options: KdcOptions,
    request_body: &KdcReqBody,
    tgt_body: &EncTicketPart,
) -> Result<TimeOutcome, KerberosError> {
    let postdated = kdc_options.contains(KdcOptions::POSTDATED);
    let mut start_time = compute_start_time(config, now, request_body.from, postdated, tgt_body)?;
    let mut options = kdc_options;

    let end_time = if kdc_options.contains(KdcOptions::RENEW) {
        if !config.renewable_allowed || !tgt_body.flags.contains(krb_types::TicketFlags::RENEWABLE) {
            return Err(KerberosError::BadOption);
        }
        let renew_till = tgt_body.renew_till.unwrap_or(tgt_body.end_time);
        if renew_till < now {
            return Err(KerberosError::ApErrTktExpired);
        }

        start_time = now;
        let lifetime = tgt_body.end_time.saturating_sub(tgt_body.start_or_auth_time());
        renew_till.min(now.saturating_add(lifetime))
    } else {
        let till = effective_till(request_body.till);
        till.min(start_time.saturating_add(config.max_ticket_lifetime))
            .min(tgt_body.end_time)
    };

    let request_till = effective_till(request_body.till);
    let mut provisional_renew_till = None;
    if kdc_options.contains(KdcOptions::RENEWABLE_OK)
        && end_time < request_till
        && tgt_body.flags.contains(krb_types::TicketFlags::RENEWABLE)
    {
        options |= KdcOptions::RENEWABLE;
        let tgt_renew_till = tgt_body.renew_till.unwrap_or(KerberosTime::INFINITY);
        provisional_renew_till = Some(request_till.min(tgt_renew_till));
    }

    let renew_till = if options.contains(KdcOptions::RENEWABLE) && tgt_body.flags.contains(krb_types::TicketFlags::RENEWABLE) {
        let rtime = provisional_renew_till.unwrap_or_else(|| match request_body.rtime {
            Some(rtime) if !rtime.is_zero() => rtime,
            _ => KerberosTime::INFINITY,
        });
        let tgt_renew_till = tgt_body.renew_till.unwrap_or(KerberosTime::INFINITY);
        Some(
            rtime
                .min(start_time.saturating_add(config.max_renewable_lifetime))
                .min(tgt_renew_till),
        )
    } else {
        None
    };

    if end_time < start_time || end_time.saturating_sub(start_time) < config.allowable_clock_skew {
        return Err(KerberosError::NeverValid);
    }

    Ok(TimeOutcome {
        auth_time: tgt_body.auth_time,
        start_time,
        end_time,
        renew_till,
    })
}
