use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("vigil")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep a browser session alive by reloading a URL and dismissing robot checks")
        .long_about(
            "vigil reloads a target URL in a desktop browser on a fixed cadence so a remote \
            notebook session never idles out. Between reloads it can watch the screen for an \
            'are you a robot' prompt and dismiss it with a humanized mouse click. A companion \
            command computes when the hosting session will expire from system uptime.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run the reload loop")
                .long_about(
                    "Run the reload loop. With GUI automation enabled (the default), each \
                    cycle polls the screen for the challenge template image — a screenshot \
                    of the 'are you a robot' prompt you want dismissed. Supply one at \
                    ~/.vigil/challenge.png or point --template at it; the run fails up \
                    front if the image cannot be loaded.",
                )
                .arg(
                    Arg::new("browser")
                        .long("browser")
                        .short('a')
                        .help("Browser to drive (overrides config)")
                        .value_parser(["chrome", "edge", "firefox", "safari"]),
                )
                .arg(
                    Arg::new("cycles")
                        .long("cycles")
                        .short('c')
                        .help("Number of reload cycles (default: 24)")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("sleep")
                        .long("sleep")
                        .short('t')
                        .help("Sleep time per cycle in seconds (default: 1800)")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("url")
                        .long("url")
                        .short('u')
                        .help("URL of the web page to reload"),
                )
                .arg(
                    Arg::new("no-gui")
                        .long("no-gui")
                        .help("Disable GUI automation; just sleep between reloads")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Polling interval of GUI automation in seconds (default: 5)")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("shutdown")
                        .long("shutdown")
                        .short('s')
                        .help("Power the machine off after the last cycle")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("template")
                        .long("template")
                        .help(
                            "Path to the challenge template image \
                            (default: ~/.vigil/challenge.png)",
                        ),
                ),
        )
        .subcommand(
            Command::new("deadline")
                .about("Compute when the hosting session will expire")
                .arg(
                    Arg::new("session")
                        .long("session")
                        .help("Maximum session time in seconds (default: 43200)")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("margin")
                        .long("margin")
                        .help("Safety margin in seconds (default: 600)")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("offset")
                        .long("offset")
                        .help("UTC offset to render the deadline in, e.g. '+09:00'"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("browsers")
                .about("List supported browsers and their availability on this host")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(clap_complete::Shell)),
                ),
        )
}
