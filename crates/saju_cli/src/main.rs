use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use saju_base::{ALL_ELEMENTS, ALL_TEN_GODS, Branch, StemRole, day_pillar, month_sector};
use saju_rs::{
    ChartAnalysis, ChartConfig, CivilBirthMoment, CivilTime, GeoLocation, JsonContent,
    MeeusSun, MidnightPolicy, PairAnalysis, ResolvedLocation, SajuError, SolarEphemeris,
    StaticGazetteer, analyze, compute_chart, compute_pair, narrate, resolve_and_compute,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillar (saju) chart CLI")]
struct Cli {
    /// TOML config file (midnight_policy, reference_meridian_deg, fallback_location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum MidnightArg {
    /// 23:00 starts the next day
    Early,
    /// 23:00 keeps the current day pillar
    Late,
}

impl From<MidnightArg> for MidnightPolicy {
    fn from(arg: MidnightArg) -> Self {
        match arg {
            MidnightArg::Early => MidnightPolicy::EarlyRollover,
            MidnightArg::Late => MidnightPolicy::LateMidnight,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and analyze a birth chart
    Chart {
        /// Civil birth time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        at: String,
        /// Birth place (built-in city table)
        #[arg(long, default_value = "Seoul")]
        place: String,
        /// Latitude in degrees; with --lon and --utc-offset-min skips the city table
        #[arg(long, allow_hyphen_values = true, requires_all = ["lon", "utc_offset_min"])]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true, requires_all = ["lat", "utc_offset_min"])]
        lon: Option<f64>,
        /// Standard zone offset from UT in minutes (e.g. 540 for KST)
        #[arg(long, allow_hyphen_values = true, requires_all = ["lat", "lon"])]
        utc_offset_min: Option<i32>,
        /// Late-evening policy (overrides config)
        #[arg(long, value_enum)]
        midnight: Option<MidnightArg>,
        /// Reference meridian in degrees (overrides config)
        #[arg(long, allow_hyphen_values = true)]
        meridian: Option<f64>,
        /// JSON narrative content file
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// Score the compatibility of two births (B against A)
    Compat {
        /// Civil birth time of A
        #[arg(long)]
        a_at: String,
        /// Birth place of A
        #[arg(long, default_value = "Seoul")]
        a_place: String,
        /// Civil birth time of B
        #[arg(long)]
        b_at: String,
        /// Birth place of B
        #[arg(long, default_value = "Seoul")]
        b_place: String,
        /// Late-evening policy (overrides config)
        #[arg(long, value_enum)]
        midnight: Option<MidnightArg>,
    },
    /// Day pillar of a calendar date
    DayPillar {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Apparent solar longitude at a UT instant
    Sun {
        /// UT datetime (YYYY-MM-DDThh:mm[:ss])
        at: String,
    },
}

#[derive(Serialize)]
struct SunReport {
    ut: CivilTime,
    jd: f64,
    longitude_deg: f64,
    month_branch: Branch,
}

#[derive(Serialize)]
struct DayPillarReport {
    date: String,
    jdn: i64,
    pillar: String,
    hanja: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(
    path: Option<&PathBuf>,
    midnight: Option<MidnightArg>,
    meridian: Option<f64>,
) -> Result<ChartConfig, SajuError> {
    let mut config = match path {
        Some(p) => {
            info!(path = %p.display(), "loading config");
            ChartConfig::load(p)?
        }
        None => ChartConfig::default(),
    };
    if let Some(m) = midnight {
        config.midnight_policy = m.into();
    }
    if meridian.is_some() {
        config.reference_meridian_deg = meridian;
    }
    config.validate()?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), SajuError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| SajuError::Input(format!("serialization failed: {e}")))?;
    println!("{text}");
    Ok(())
}

fn print_analysis(a: &ChartAnalysis) {
    let r = &a.report;
    let m = &r.moment;
    println!(
        "Civil {} @ {} ({:+.1} min) -> true local {}",
        m.civil, m.location.time_zone_id, -m.offset_minutes, m.true_local
    );
    println!(
        "Sun longitude {:.4} deg, chart year {}",
        r.sun_longitude_deg, r.saju_year
    );
    println!();
    println!("        Year    Month   Day     Hour");
    let pillars = r.chart.pillars();
    let hanja: Vec<String> = pillars.iter().map(|(_, p)| p.hanja()).collect();
    let roman: Vec<String> = pillars.iter().map(|(_, p)| p.to_string()).collect();
    println!("        {}", hanja.join("    "));
    println!("        {}", roman.join("  "));
    for g in &a.position_gods {
        let stem = match g.stem {
            StemRole::DayMaster => "DayMaster".to_string(),
            StemRole::God(god) => god.name().to_string(),
        };
        println!(
            "  {:<6} stem {:<17} branch {}",
            g.position.name(),
            stem,
            g.branch.name()
        );
    }

    println!();
    println!("Elements (visual / weighted):");
    for e in ALL_ELEMENTS {
        println!(
            "  {:<6} {:>4.1} / {:>5.2}",
            e.name(),
            a.elements.visual.get(e),
            a.elements.weighted.get(e)
        );
    }
    println!(
        "  Earth dry/wet: {:.2} / {:.2}",
        a.elements.weighted_earth.dry, a.elements.weighted_earth.wet
    );

    println!();
    println!("Ten gods:");
    for god in ALL_TEN_GODS {
        let v = a.gods.get(god);
        if v > 0.0 {
            println!("  {:<17} {:>5.2}", god.name(), v);
        }
    }
    println!(
        "Dominant: {} / {} ({})",
        a.dominance.element.name(),
        a.dominance.god.name(),
        a.dominance.group.name()
    );

    println!();
    if a.findings.is_empty() {
        println!("No findings");
    } else {
        println!("Findings:");
        for f in &a.findings {
            println!("  {}", f.key.id());
        }
    }
}

fn print_pair(p: &PairAnalysis) {
    println!("A: {}", p.a.report.chart);
    println!("B: {}", p.b.report.chart);
    let c = &p.compatibility;
    println!("Base score: {}", c.base_score);
    for adj in &c.adjustments {
        println!(
            "  {:<5} {}-{} {:?} {:+}",
            adj.slot.name(),
            adj.branches.0.hanja(),
            adj.branches.1.hanja(),
            adj.relation,
            adj.delta
        );
    }
    println!("Final score: {}", c.final_score);
}

fn run(cli: Cli) -> Result<(), SajuError> {
    let gazetteer = StaticGazetteer::default();

    match cli.command {
        Commands::Chart {
            at,
            place,
            lat,
            lon,
            utc_offset_min,
            midnight,
            meridian,
            content,
        } => {
            let config = load_config(cli.config.as_ref(), midnight, meridian)?;
            let civil: CivilTime = at.parse()?;
            let report = match (lat, lon, utc_offset_min) {
                (Some(lat), Some(lon), Some(offset)) => {
                    let loc = GeoLocation::new(lat, lon, place, offset);
                    compute_chart(civil, &ResolvedLocation::exact(loc), &config)?
                }
                _ => resolve_and_compute(
                    &gazetteer,
                    &CivilBirthMoment::new(civil, place),
                    &config,
                )?,
            };
            let analysis = analyze(report);

            let narrative = match content {
                Some(path) => {
                    let text = std::fs::read_to_string(&path).map_err(|e| {
                        SajuError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
                    })?;
                    Some(narrate(&analysis, &JsonContent::from_json_str(&text)?))
                }
                None => None,
            };

            if cli.json {
                #[derive(Serialize)]
                struct Out<'a> {
                    #[serde(flatten)]
                    analysis: &'a ChartAnalysis,
                    #[serde(skip_serializing_if = "Option::is_none")]
                    narrative: Option<&'a Vec<saju_rs::NarrativeEntry>>,
                }
                print_json(&Out {
                    analysis: &analysis,
                    narrative: narrative.as_ref(),
                })?;
            } else {
                print_analysis(&analysis);
                for entry in narrative.iter().flatten() {
                    println!();
                    println!("## {}", entry.title);
                    println!("{}", entry.body);
                }
            }
        }

        Commands::Compat {
            a_at,
            a_place,
            b_at,
            b_place,
            midnight,
        } => {
            let config = load_config(cli.config.as_ref(), midnight, None)?;
            let a = CivilBirthMoment::new(a_at.parse()?, a_place);
            let b = CivilBirthMoment::new(b_at.parse()?, b_place);
            let pair = compute_pair(&gazetteer, &a, &b, &config)?;
            if cli.json {
                print_json(&pair)?;
            } else {
                print_pair(&pair);
            }
        }

        Commands::DayPillar { date } => {
            let t: CivilTime = date.parse()?;
            let jdn = t.julian_day_number();
            let pillar = day_pillar(jdn);
            if cli.json {
                print_json(&DayPillarReport {
                    date,
                    jdn,
                    pillar: pillar.to_string(),
                    hanja: pillar.hanja(),
                })?;
            } else {
                println!("{date} (JDN {jdn}): {} ({pillar})", pillar.hanja());
            }
        }

        Commands::Sun { at } => {
            let ut: CivilTime = at.parse()?;
            let jd = ut.to_jd();
            let longitude_deg = MeeusSun.sun_longitude_deg(jd)?;
            let month_branch = Branch::from_cycle(i64::from(month_sector(longitude_deg)) + 2);
            if cli.json {
                print_json(&SunReport {
                    ut,
                    jd,
                    longitude_deg,
                    month_branch,
                })?;
            } else {
                println!(
                    "{ut} UT (JD {jd:.5}): Sun {longitude_deg:.4} deg, {} month",
                    month_branch.hanja()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
