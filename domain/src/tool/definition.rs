//! Registration metadata of the `tavily_search` tool.

use super::entities::{ToolDefinition, ToolParameter};

/// Canonical tool name.
pub const TAVILY_SEARCH: &str = "tavily_search";

const DESCRIPTION: &str = "\
Use this tool when the users ask to access the web, internet or online to seek information for answering their query.
Utilizza questo strumento quando l'utente richiede di accedere al web, a internet o a risorse online per ottenere informazioni necessarie a rispondere alla sua domanda.
Input is the query itself, including parameters: web domains and/or number of results desired, topic and time range.
L'input è la query stessa, includi i parametri: i domini web e/o il numero di risultati richiesti, topic e intervallo di tempo.";

/// Paired English/Italian requests the host can match against.
const EXAMPLES: &[&str] = &[
    "search the web for contemporary art exhibitions in major European museums",
    "cerca sul web mostre d'arte contemporanea nei principali musei europei",
    "explore scientific sources online for information about Mediterranean diet benefits",
    "esplora fonti scientifiche online per informazioni sui benefici della dieta mediterranea",
    "find the latest research on effective teaching methods in primary education",
    "trova le ricerche più recenti sui metodi di insegnamento efficaci nella scuola primaria",
    "search advanced web results about Renaissance literature from domain:jstor.org",
    "cerca risultati web avanzati sulla letteratura rinascimentale dal domain:jstor.org",
    "limit the search to five travel guides for sustainable tourism in Southeast Asia",
    "limita la ricerca a cinque guide di viaggio per turismo sostenibile nel Sud-est asiatico",
    "narrow down to ten articles on Olympic Games history via tavily",
    "restringi i risultati a dieci articoli sulla storia dei Giochi Olimpici tramite tavily",
    "research advanced information on marine biodiversity from academic domains",
    "ricerca informazioni avanzate sulla biodiversità marina da domini accademici",
    "find the latest mental health research from domains:apa.org,who.int",
    "trova le più recenti ricerche sulla salute mentale dai domains:apa.org,who.int",
    "restrict results to three traditional recipes from around the world",
    "circoscrivi i risultati a tre ricette tradizionali da tutto il mondo",
    "find classical music composers from domain:music.edu",
    "trova compositori di musica classica dal domain:music.edu",
    "search for information about ancient Egyptian architecture from domain:archaeology.org",
    "cerca informazioni sull'architettura dell'antico Egitto dal domain:archaeology.org",
    "filter and show only seven parenting tips from domain:pediatrics.org",
    "filtra e mostra solo sette consigli per genitori dal domain:pediatrics.org",
    "research current trends in sustainable fashion from fashion magazines",
    "ricerca tendenze attuali nella moda sostenibile dalle riviste di moda",
    "return a maximum of eight natural remedies for common ailments",
    "riporta un massimo di otto rimedi naturali per disturbi comuni",
    "find recent discoveries in astronomy from domains:nasa.gov,esa.int",
    "trova le recenti scoperte in astronomia dai domains:nasa.gov,esa.int",
    "show me no more than six beginner-friendly gardening tips",
    "mostrami non più di sei consigli di giardinaggio per principianti",
    "discover critically acclaimed films of the last decade on the web",
    "scopri i film più acclamati dalla critica dell'ultimo decennio sul web",
    "research historical information about the Industrial Revolution from academic sources",
    "ricerca informazioni storiche sulla Rivoluzione Industriale da fonti accademiche",
    "gather only four economic forecasts for small businesses from domains:economist.com,bloomberg.com",
    "raccogli solo quattro previsioni economiche per piccole imprese dai domains:economist.com,bloomberg.com",
    "confine the search to a few effective workout routines from trustworthy fitness sources",
    "limita i risultati ad alcune routine di allenamento efficaci da fonti affidabili sul fitness",
    "I need three articles from repubblica.it about sport",
    "mi servono tre articoli su repubblica.it di sport",
    "search for news about climate change from the last 5 days",
    "cerca notizie sui cambiamenti climatici degli ultimi 5 giorni",
    "find news articles about financial markets from the past week",
    "trova articoli di notizie sui mercati finanziari dell'ultima settimana",
    "look for information on electric vehicles published in the last year",
    "cerca informazioni sui veicoli elettrici pubblicate nell'ultimo anno",
    "get the latest news from the last 2 days about technology startups",
    "ottieni le ultime notizie degli ultimi 2 giorni sulle startup tecnologiche",
    "search news from the past month about space exploration",
    "cerca notizie dell'ultimo mese sull'esplorazione spaziale",
    "find scientific research from the past year about quantum computing",
    "trova ricerche scientifiche dell'ultimo anno sul quantum computing",
    "get the most recent news about international politics from this week",
    "ottieni le notizie più recenti sulla politica internazionale di questa settimana",
    "search for the latest developments in AI from today",
    "cerca gli ultimi sviluppi nell'IA di oggi",
    "find all articles about Jannik Sinner on ubitennis.com from the last month and report a maximum of 10",
    "trovami tutti gli articoli che parlano di Jannik Sinner su ubitennis.com, nell'ultimo mese e riportane massimo 10",
];

/// Create the [`ToolDefinition`] for `tavily_search`.
pub fn tavily_search_definition() -> ToolDefinition {
    ToolDefinition::new(TAVILY_SEARCH, DESCRIPTION)
        .with_parameter(
            ToolParameter::new(
                "query",
                "The search request in natural language, including any domains, result count, topic or time range",
                true,
            )
            .with_type("string"),
        )
        .with_examples(EXAMPLES.iter().copied())
        .return_direct(true)
}
