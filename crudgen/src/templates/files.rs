//! Template file contents
//!
//! Handlebars sources for the generated C# files. Every template receives
//! the same view-model: `EntityName`, `CollectionName`, `RoutePath`,
//! `Namespace`, `DatabaseName` and `Properties` (`Name`, `Type`,
//! `ConcreteType`).

/// Entity class
pub const ENTITY_TEMPLATE: &str = r"namespace {{Namespace}}.Domain.Entities;

public class {{EntityName}}
{
{{#each Properties}}
    public {{ConcreteType}} {{Name}} { get; set; }
{{/each}}
}
";

/// EF Core database context
pub const DB_CONTEXT_TEMPLATE: &str = r"using {{Namespace}}.Domain.Entities;
using Microsoft.EntityFrameworkCore;

namespace {{Namespace}}.Infrastructure.Persistence;

public class AppDbContext : DbContext
{
    public AppDbContext(DbContextOptions<AppDbContext> options) : base(options)
    {
    }

    public DbSet<{{EntityName}}> {{CollectionName}} => Set<{{EntityName}}>();
}
";

/// Repository interface
pub const REPOSITORY_INTERFACE_TEMPLATE: &str = r"using {{Namespace}}.Domain.Entities;

namespace {{Namespace}}.Application.Repositories;

public interface I{{EntityName}}Repository
{
    Task<List<{{EntityName}}>> GetAllAsync(CancellationToken cancellationToken = default);
    Task<{{EntityName}}?> GetByIdAsync(int id, CancellationToken cancellationToken = default);
    Task<{{EntityName}}> AddAsync({{EntityName}} entity, CancellationToken cancellationToken = default);
    Task UpdateAsync({{EntityName}} entity, CancellationToken cancellationToken = default);
    Task DeleteAsync(int id, CancellationToken cancellationToken = default);
}
";

/// Repository implementation backed by `AppDbContext`
pub const REPOSITORY_IMPLEMENTATION_TEMPLATE: &str = r"using {{Namespace}}.Application.Repositories;
using {{Namespace}}.Domain.Entities;
using {{Namespace}}.Infrastructure.Persistence;
using Microsoft.EntityFrameworkCore;

namespace {{Namespace}}.Infrastructure.Repositories;

public class {{EntityName}}Repository : I{{EntityName}}Repository
{
    private readonly AppDbContext _dbContext;

    public {{EntityName}}Repository(AppDbContext dbContext)
    {
        _dbContext = dbContext;
    }

    public async Task<List<{{EntityName}}>> GetAllAsync(CancellationToken cancellationToken = default)
    {
        return await _dbContext.{{CollectionName}}.AsNoTracking().ToListAsync(cancellationToken);
    }

    public async Task<{{EntityName}}?> GetByIdAsync(int id, CancellationToken cancellationToken = default)
    {
        return await _dbContext.{{CollectionName}}.AsNoTracking().FirstOrDefaultAsync(item => item.Id == id, cancellationToken);
    }

    public async Task<{{EntityName}}> AddAsync({{EntityName}} entity, CancellationToken cancellationToken = default)
    {
        _dbContext.{{CollectionName}}.Add(entity);
        await _dbContext.SaveChangesAsync(cancellationToken);
        return entity;
    }

    public async Task UpdateAsync({{EntityName}} entity, CancellationToken cancellationToken = default)
    {
        _dbContext.{{CollectionName}}.Update(entity);
        await _dbContext.SaveChangesAsync(cancellationToken);
    }

    public async Task DeleteAsync(int id, CancellationToken cancellationToken = default)
    {
        var entity = await _dbContext.{{CollectionName}}.FindAsync([id], cancellationToken);
        if (entity is null)
        {
            return;
        }
        _dbContext.{{CollectionName}}.Remove(entity);
        await _dbContext.SaveChangesAsync(cancellationToken);
    }
}
";

/// API controller
pub const CONTROLLER_TEMPLATE: &str = r#"using {{Namespace}}.Application.Repositories;
using {{Namespace}}.Domain.Entities;
using Microsoft.AspNetCore.Mvc;

namespace {{Namespace}}.Api.Controllers;

[ApiController]
[Route("{{RoutePath}}")]
public class {{EntityName}}Controller : ControllerBase
{
    private readonly I{{EntityName}}Repository _repository;

    public {{EntityName}}Controller(I{{EntityName}}Repository repository)
    {
        _repository = repository;
    }

    [HttpGet]
    public async Task<ActionResult<List<{{EntityName}}>>> GetAll(CancellationToken cancellationToken)
    {
        var items = await _repository.GetAllAsync(cancellationToken);
        return Ok(items);
    }

    [HttpGet("{id:int}")]
    public async Task<ActionResult<{{EntityName}}>> GetById(int id, CancellationToken cancellationToken)
    {
        var item = await _repository.GetByIdAsync(id, cancellationToken);
        if (item is null)
        {
            return NotFound();
        }
        return Ok(item);
    }

    [HttpPost]
    public async Task<ActionResult<{{EntityName}}>> Create([FromBody] {{EntityName}} entity, CancellationToken cancellationToken)
    {
        var created = await _repository.AddAsync(entity, cancellationToken);
        return CreatedAtAction(nameof(GetById), new { id = created.Id }, created);
    }

    [HttpPut("{id:int}")]
    public async Task<IActionResult> Update(int id, [FromBody] {{EntityName}} entity, CancellationToken cancellationToken)
    {
        if (id != entity.Id)
        {
            return BadRequest();
        }
        await _repository.UpdateAsync(entity, cancellationToken);
        return NoContent();
    }

    [HttpDelete("{id:int}")]
    public async Task<IActionResult> Delete(int id, CancellationToken cancellationToken)
    {
        await _repository.DeleteAsync(id, cancellationToken);
        return NoContent();
    }
}
"#;

/// Application bootstrap
pub const PROGRAM_TEMPLATE: &str = r#"using {{Namespace}}.Application.Repositories;
using {{Namespace}}.Infrastructure.Persistence;
using {{Namespace}}.Infrastructure.Repositories;
using Microsoft.EntityFrameworkCore;

var builder = WebApplication.CreateBuilder(args);

builder.Services.AddDbContext<AppDbContext>(options =>
    options.UseInMemoryDatabase("{{DatabaseName}}"));

builder.Services.AddScoped<I{{EntityName}}Repository, {{EntityName}}Repository>();

builder.Services.AddControllers();

var app = builder.Build();

app.MapControllers();

app.Run();
"#;
