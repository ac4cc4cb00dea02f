use clap::Parser;
use planner::application::{
    init, ActivitiesService, ConfigService, CurrentTripService, GuestsService, LinksService,
    PlanTripService, UpdateTripService,
};
use planner::cli::{
    output, parse_date, ActivityCommands, Cli, Commands, GuestCommands, LinkCommands, TripCommands,
};
use planner::domain::TripForm;
use planner::error::PlannerError;
use planner::infrastructure::{
    ActivitiesGateway, ApiClient, Config, LinksGateway, ParticipantsGateway, PlannerRoot,
    TripsGateway,
};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discovered planner root together with its config and API client
struct Context {
    root: PlannerRoot,
    config: Config,
    api: ApiClient,
}

fn context() -> Result<Context, PlannerError> {
    let root = PlannerRoot::discover()?;
    let config = root.load_config()?;
    let api = ApiClient::new(&config.api_url())?;

    Ok(Context { root, config, api })
}

fn run(cli: Cli) -> Result<(), PlannerError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Config { key, value, list } => run_config(key, value, list),
        Commands::Create {
            destination,
            days,
            invites,
        } => run_create(&destination, &days, &invites),
        Commands::Trip { command } => run_trip(command),
        Commands::Activity { command } => run_activity(command),
        Commands::Link { command } => run_link(command),
        Commands::Guest { command } => run_guest(command),
    }
}

fn run_config(key: Option<String>, value: Option<String>, list: bool) -> Result<(), PlannerError> {
    let root = PlannerRoot::discover()?;
    let service = ConfigService::new(root);

    if list {
        let config = service.list()?;
        println!("api_url = {}", config.api_url);
        println!("owner_name = {}", config.owner_name);
        println!("owner_email = {}", config.owner_email);
        println!("created = {}", config.created.to_rfc3339());
        Ok(())
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
            Ok(())
        } else {
            let val = service.get(&k)?;
            println!("{}", val);
            Ok(())
        }
    } else {
        println!("Usage: planner config [--list | <key> [<value>]]");
        println!("Valid keys: api_url, owner_name, owner_email, created");
        Ok(())
    }
}

fn run_create(destination: &str, days: &[String], invites: &[String]) -> Result<(), PlannerError> {
    let ctx = context()?;

    // Drive the wizard exactly as the form defines it: details first,
    // then guests, then submit.
    let mut form = TripForm::new();
    form.set_destination(destination);
    for day in days {
        form.select_day(parse_date(day)?);
    }
    form.advance()?;
    for email in invites {
        form.add_guest(email)?;
    }

    let service = PlanTripService::new(TripsGateway::new(ctx.api), ctx.root);
    let trip_id = service.execute(&form, &ctx.config.owner_name, &ctx.config.owner_email)?;

    println!("Trip to {} created: {}", form.destination().trim(), trip_id);
    println!("{}", form.selection().label());
    if !form.guest_emails().is_empty() {
        println!("{} guest(s) invited", form.guest_emails().len());
    }

    Ok(())
}

fn run_trip(command: TripCommands) -> Result<(), PlannerError> {
    match command {
        TripCommands::Show => {
            let ctx = context()?;
            let service = CurrentTripService::new(TripsGateway::new(ctx.api), ctx.root);

            let trip = service.load()?;
            print!("{}", output::format_trip_overview(&trip));
            Ok(())
        }
        TripCommands::Update { destination, days } => {
            let ctx = context()?;

            let taps = days
                .iter()
                .map(|day| parse_date(day))
                .collect::<Result<Vec<_>, _>>()?;

            let service = UpdateTripService::new(TripsGateway::new(ctx.api), ctx.root);
            let trip = service.execute(destination.as_deref(), &taps)?;

            println!("Trip updated");
            print!("{}", output::format_trip_overview(&trip));
            Ok(())
        }
        TripCommands::Forget => {
            let ctx = context()?;
            let service = CurrentTripService::new(TripsGateway::new(ctx.api), ctx.root);

            if service.forget()? {
                println!("Current trip forgotten");
            } else {
                println!("No current trip to forget");
            }
            Ok(())
        }
    }
}

fn run_activity(command: ActivityCommands) -> Result<(), PlannerError> {
    let ctx = context()?;
    let current = CurrentTripService::new(TripsGateway::new(ctx.api.clone()), ctx.root.clone());
    let trip_id = current.current_id()?;

    let service = ActivitiesService::new(
        ActivitiesGateway::new(ctx.api.clone()),
        TripsGateway::new(ctx.api),
    );

    match command {
        ActivityCommands::Add { title, day, hour } => {
            let day = parse_date(&day)?;
            let activity_id = service.add(&trip_id, &title, day, hour)?;
            println!("Activity scheduled: {}", activity_id);
            Ok(())
        }
        ActivityCommands::List => {
            let now = chrono::Local::now().naive_local();
            let sections = service.list(&trip_id, now)?;
            print!("{}", ensure_newline(output::format_day_sections(&sections)));
            Ok(())
        }
    }
}

fn run_link(command: LinkCommands) -> Result<(), PlannerError> {
    let ctx = context()?;
    let current = CurrentTripService::new(TripsGateway::new(ctx.api.clone()), ctx.root);
    let trip_id = current.current_id()?;

    let service = LinksService::new(LinksGateway::new(ctx.api));

    match command {
        LinkCommands::Add { title, url } => {
            let link_id = service.add(&trip_id, &title, &url)?;
            println!("Link added: {}", link_id);
            Ok(())
        }
        LinkCommands::List => {
            let links = service.list(&trip_id)?;
            print!("{}", ensure_newline(output::format_links(&links)));
            Ok(())
        }
    }
}

fn run_guest(command: GuestCommands) -> Result<(), PlannerError> {
    let ctx = context()?;

    match command {
        GuestCommands::List => {
            let current =
                CurrentTripService::new(TripsGateway::new(ctx.api.clone()), ctx.root.clone());
            let trip_id = current.current_id()?;

            let service = GuestsService::new(ParticipantsGateway::new(ctx.api), ctx.root);
            let participants = service.list(&trip_id)?;
            print!(
                "{}",
                ensure_newline(output::format_participants(&participants))
            );
            Ok(())
        }
        GuestCommands::Confirm {
            trip_id,
            participant,
            name,
            email,
        } => {
            let service = GuestsService::new(ParticipantsGateway::new(ctx.api), ctx.root);
            service.confirm(&trip_id, &participant, &name, &email)?;

            println!("Attendance confirmed for trip {}", trip_id);
            Ok(())
        }
    }
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
